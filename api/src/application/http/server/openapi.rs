use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bagcheck API",
        description = "Checks whether an item is allowed in carry-on or checked baggage."
    ),
    paths(
        crate::application::http::item_check::handlers::check_item::check_item,
        crate::application::http::health::root
    ),
    tags(
        (name = "item-check", description = "Item check endpoints"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
