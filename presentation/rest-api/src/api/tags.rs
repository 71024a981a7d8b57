use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Catalog,
    Recommendations,
    Chat,
    Cart,
    Suggestions,
}
