use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    /// Product to mark as selected in the listing
    #[serde(default)]
    pub id: Option<String>,
}
