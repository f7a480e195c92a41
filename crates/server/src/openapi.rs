use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub message: String }

#[derive(ToSchema)]
pub struct AckDoc { pub success: bool }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomDoc {
    pub id: String,
    pub name: String,
    /// Text-encoded amount
    pub price: String,
    pub image: Option<String>,
    pub booked: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDoc {
    pub id: String,
    pub name: String,
    pub info: String,
    /// Public path of the uploaded image, "" when none
    pub image: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDoc {
    pub id: String,
    pub name: String,
    pub text: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct PriceInputDoc { pub price: String }

#[derive(ToSchema)]
pub struct ReviewInputDoc { pub name: String, pub text: String }

#[derive(ToSchema)]
pub struct OwnerFormDoc {
    pub name: String,
    pub info: Option<String>,
    #[schema(format = Binary)]
    pub image: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::rooms::list,
        crate::routes::rooms::update_price,
        crate::routes::owners::list,
        crate::routes::owners::create,
        crate::routes::owners::remove,
        crate::routes::reviews::list,
        crate::routes::reviews::create,
        crate::routes::reviews::remove,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            AckDoc,
            RoomDoc,
            OwnerDoc,
            ReviewDoc,
            PriceInputDoc,
            ReviewInputDoc,
            OwnerFormDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "rooms"),
        (name = "owners"),
        (name = "reviews")
    )
)]
pub struct ApiDoc;
