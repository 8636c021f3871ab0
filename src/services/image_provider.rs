//! City image lookup capability
//!
//! A provider turns a city name into an image URL for the display page.
//! No real provider ships; `NoImageProvider` is the default and the page
//! simply leaves the image slot empty.

#[async_trait::async_trait]
pub trait ImageProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Look up an image URL for the given city, if the provider has one
    async fn find_image(&self, city: &str) -> Option<String>;
}

/// Default provider: never returns an image
pub struct NoImageProvider;

#[async_trait::async_trait]
impl ImageProvider for NoImageProvider {
    fn name(&self) -> &'static str {
        "none"
    }

    async fn find_image(&self, _city: &str) -> Option<String> {
        None
    }
}
