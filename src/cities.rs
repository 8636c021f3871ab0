//! City reference table and threshold lookup
//!
//! Maps a death count to the most populous German city whose registered
//! population the count reaches. The table is sorted descending by
//! population; the lookup is a linear first-match scan and is only correct
//! under that ordering. The ordering is pinned by unit test below rather
//! than checked at runtime.

/// One reference table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    /// City name as displayed
    pub name: &'static str,
    /// Registered population (2019/2020 figures)
    pub population: u64,
}

/// The 147 largest German cities, descending by population.
pub static CITIES: &[City] = &[
    City { name: "Berlin", population: 3_669_491 },
    City { name: "Hamburg", population: 1_847_253 },
    City { name: "München", population: 1_484_226 },
    City { name: "Koeln", population: 1_087_863 },
    City { name: "Frankfurt am Main", population: 763_380 },
    City { name: "Stuttgart", population: 635_911 },
    City { name: "Düsseldorf", population: 621_877 },
    City { name: "Leipzig", population: 593_145 },
    City { name: "Dortmund", population: 588_250 },
    City { name: "Essen", population: 582_760 },
    City { name: "Bremen", population: 567_559 },
    City { name: "Dresden", population: 556_780 },
    City { name: "Hannover", population: 536_925 },
    City { name: "Nürnberg", population: 518_370 },
    City { name: "Duisburg", population: 498_686 },
    City { name: "Bochum", population: 365_587 },
    City { name: "Wuppertal", population: 355_100 },
    City { name: "Bielefeld", population: 334_195 },
    City { name: "Bonn", population: 329_673 },
    City { name: "Muenster", population: 315_293 },
    City { name: "Karlsruhe", population: 312_060 },
    City { name: "Mannheim", population: 310_658 },
    City { name: "Augsburg", population: 296_582 },
    City { name: "Wiesbaden", population: 278_474 },
    City { name: "Mönchengladbach", population: 261_034 },
    City { name: "Gelsenkirchen", population: 259_645 },
    City { name: "Braunschweig", population: 249_406 },
    City { name: "Aachen", population: 248_960 },
    City { name: "Kiel", population: 246_794 },
    City { name: "Chemnitz", population: 246_334 },
    City { name: "Halle", population: 238_762 },
    City { name: "Magdeburg", population: 237_565 },
    City { name: "Freiburg", population: 231_195 },
    City { name: "Krefeld", population: 227_417 },
    City { name: "Mainz", population: 218_578 },
    City { name: "Lübeck", population: 216_530 },
    City { name: "Erfurt", population: 213_981 },
    City { name: "Oberhausen", population: 210_764 },
    City { name: "Rostock", population: 209_191 },
    City { name: "Kassel", population: 202_137 },
    City { name: "Hagen", population: 188_686 },
    City { name: "Saarbrücken", population: 180_374 },
    City { name: "Potsdam", population: 180_334 },
    City { name: "Hamm", population: 179_916 },
    City { name: "Ludwigshafen", population: 172_253 },
    City { name: "Muelheim", population: 170_632 },
    City { name: "Oldenburg", population: 169_077 },
    City { name: "Osnabrück", population: 165_251 },
    City { name: "Leverkusen", population: 163_729 },
    City { name: "Heidelberg", population: 161_485 },
    City { name: "Darmstadt", population: 159_878 },
    City { name: "Solingen", population: 159_245 },
    City { name: "Herne", population: 156_449 },
    City { name: "Neuss", population: 153_896 },
    City { name: "Regensburg", population: 153_094 },
    City { name: "Paderborn", population: 151_633 },
    City { name: "Ingolstadt", population: 137_392 },
    City { name: "Offenbach", population: 130_280 },
    City { name: "Fuerth", population: 128_497 },
    City { name: "Wuerzburg", population: 127_934 },
    City { name: "Ulm", population: 126_790 },
    City { name: "Heilbronn", population: 126_592 },
    City { name: "Pforzheim", population: 125_957 },
    City { name: "Wolfsburg", population: 124_371 },
    City { name: "Goettingen", population: 118_911 },
    City { name: "Bottrop", population: 117_565 },
    City { name: "Reutlingen", population: 115_865 },
    City { name: "Koblenz", population: 114_052 },
    City { name: "Bremerhaven", population: 113_643 },
    City { name: "Erlangen", population: 112_528 },
    City { name: "Bergisch Gladbach", population: 111_846 },
    City { name: "Trier", population: 111_528 },
    City { name: "Recklinghausen", population: 111_397 },
    City { name: "Jena", population: 111_343 },
    City { name: "Remscheid", population: 111_338 },
    City { name: "Salzgitter", population: 104_291 },
    City { name: "Moers", population: 103_902 },
    City { name: "Siegen", population: 102_770 },
    City { name: "Hildesheim", population: 101_693 },
    City { name: "Guetersloh", population: 100_861 },
    City { name: "Kaiserslautern", population: 100_030 },
    City { name: "Cottbus", population: 99_678 },
    City { name: "Hanau", population: 96_492 },
    City { name: "Witten", population: 96_459 },
    City { name: "Schwerin", population: 95_653 },
    City { name: "Esslingen", population: 94_145 },
    City { name: "Ludwigsburg", population: 93_584 },
    City { name: "Gera", population: 93_125 },
    City { name: "Iserlohn", population: 92_174 },
    City { name: "Tuebingen", population: 91_506 },
    City { name: "Dueren", population: 91_216 },
    City { name: "Flensburg", population: 90_164 },
    City { name: "Giessen", population: 89_802 },
    City { name: "Zwickau", population: 88_690 },
    City { name: "Ratingen", population: 87_520 },
    City { name: "Luenen", population: 86_348 },
    City { name: "Villingen Schwenningen", population: 85_707 },
    City { name: "Konstanz", population: 84_911 },
    City { name: "Marl", population: 84_067 },
    City { name: "Worms", population: 83_542 },
    City { name: "Velbert", population: 81_842 },
    City { name: "Minden", population: 81_716 },
    City { name: "Neumuenster", population: 80_196 },
    City { name: "Dessau", population: 80_103 },
    City { name: "Norderstedt", population: 79_357 },
    City { name: "Delmenhorst", population: 77_559 },
    City { name: "Bamberg", population: 77_373 },
    City { name: "Marburg", population: 77_129 },
    City { name: "Viersen", population: 77_102 },
    City { name: "Rheine", population: 76_218 },
    City { name: "Wilhelmshaven", population: 76_089 },
    City { name: "Lüneburg", population: 75_711 },
    City { name: "Gladbeck", population: 75_610 },
    City { name: "Troisdorf", population: 74_953 },
    City { name: "Bayreuth", population: 74_783 },
    City { name: "Dorsten", population: 74_704 },
    City { name: "Detmold", population: 74_254 },
    City { name: "Arnsberg", population: 73_456 },
    City { name: "Landshut", population: 73_411 },
    City { name: "Castrop Rauxel", population: 73_343 },
    City { name: "Luedenscheid", population: 72_313 },
    City { name: "Brandenburg an der Havel", population: 72_184 },
    City { name: "Bocholt", population: 71_113 },
    City { name: "Aschaffenburg", population: 71_002 },
    City { name: "Celle", population: 69_540 },
    City { name: "Kempten", population: 69_151 },
    City { name: "Fulda", population: 68_635 },
    City { name: "Aalen", population: 68_393 },
    City { name: "Lippstadt", population: 67_952 },
    City { name: "Dinslaken", population: 67_373 },
    City { name: "Kerpen", population: 66_702 },
    City { name: "Herford", population: 66_638 },
    City { name: "Ruesselsheim", population: 65_881 },
    City { name: "Weimar", population: 65_228 },
    City { name: "Sindelfingen", population: 64_905 },
    City { name: "Neuwied", population: 64_765 },
    City { name: "Plauen", population: 64_597 },
    City { name: "Dormagen", population: 64_340 },
    City { name: "Neubrandenburg", population: 63_761 },
    City { name: "Grevenbroich", population: 63_743 },
    City { name: "Rosenheim", population: 63_551 },
    City { name: "Herten", population: 61_821 },
    City { name: "Bergheim", population: 61_601 },
    City { name: "Friedrichshafen", population: 61_283 },
    City { name: "Schwaebisch Gmuend", population: 61_137 },
    City { name: "Garbsen", population: 61_032 },
    City { name: "Wesel", population: 60_230 },
];

/// Find the most populous city whose population is at or below `count`.
///
/// Returns `None` when `count` is smaller than every entry in the table.
pub fn find_city(count: u64) -> Option<&'static City> {
    first_at_or_below(CITIES, count)
}

/// First entry of `table` whose population is `<= count`.
///
/// Linear first-match scan; `table` must be sorted descending by population
/// for the result to be the most populous qualifying entry. Ties resolve to
/// the earlier entry.
pub fn first_at_or_below(table: &[City], count: u64) -> Option<&City> {
    table.iter().find(|city| city.population <= count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_descending() {
        for pair in CITIES.windows(2) {
            assert!(
                pair[0].population >= pair[1].population,
                "{} ({}) listed before {} ({})",
                pair[0].name,
                pair[0].population,
                pair[1].name,
                pair[1].population
            );
        }
    }

    #[test]
    fn count_above_largest_entry_resolves_to_first() {
        assert_eq!(find_city(4_000_000).unwrap().name, "Berlin");
        assert_eq!(find_city(u64::MAX).unwrap().name, "Berlin");
    }

    #[test]
    fn boundary_is_inclusive() {
        // Exactly Berlin's population still resolves to Berlin
        assert_eq!(find_city(3_669_491).unwrap().name, "Berlin");
    }

    #[test]
    fn just_below_largest_resolves_to_next_entry() {
        assert_eq!(find_city(3_669_490).unwrap().name, "Hamburg");
    }

    #[test]
    fn interior_band_resolves_to_band_owner() {
        // Hamburg's band runs from its own population up to one below Berlin's
        assert_eq!(find_city(1_847_253).unwrap().name, "Hamburg");
        assert_eq!(find_city(2_500_000).unwrap().name, "Hamburg");
        // One below Hamburg falls to München
        assert_eq!(find_city(1_847_252).unwrap().name, "München");
    }

    #[test]
    fn smallest_entry_boundary() {
        let last = CITIES.last().unwrap();
        assert_eq!(last.name, "Wesel");
        assert_eq!(last.population, 60_230);

        assert_eq!(find_city(60_230).unwrap().name, "Wesel");
        assert_eq!(find_city(60_229), None);
        assert_eq!(find_city(60_000), None);
    }

    #[test]
    fn zero_resolves_to_none() {
        assert_eq!(find_city(0), None);
    }

    #[test]
    fn ties_resolve_to_first_entry() {
        // The real table has no ties; the policy is pinned on a local one.
        let table = [
            City { name: "a", population: 100 },
            City { name: "b", population: 100 },
            City { name: "c", population: 50 },
        ];
        assert_eq!(first_at_or_below(&table, 100).unwrap().name, "a");
        assert_eq!(first_at_or_below(&table, 99).unwrap().name, "c");
    }

    #[test]
    fn empty_table_resolves_to_none() {
        assert_eq!(first_at_or_below(&[], 1_000_000), None);
    }
}
