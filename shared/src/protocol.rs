use crate::{
    Appointment, Client, ClientUpdate, Id, MedicalRecord, NewAppointment, NewClient,
    NewMedicalRecord, NewPet, Pet, PetDetails, PetUpdate, User,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// 删除接口的响应：2xx 时响应体内容（`null`、空、`{message}` 等）一律忽略
pub type Acknowledged = serde::de::IgnoredAny;

/// 更新接口返回的原始 JSON 对象（用于合并进本地缓存）
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest {
    /// The JSON body sent with the request.
    type Body: Serialize;
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Message shown when the backend fails without an `error` field.
    const DEFAULT_ERROR: &'static str;

    /// The URL path relative to the API base, including the query string.
    fn path(&self) -> String;

    fn body(&self) -> Option<&Self::Body> {
        None
    }
}

/// Body of every non-2xx response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }
}

// =========================================================
// Session
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

impl ApiRequest for LoginRequest {
    type Body = Self;
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const DEFAULT_ERROR: &'static str = "登录失败";

    fn path(&self) -> String {
        "/login".to_string()
    }

    fn body(&self) -> Option<&Self> {
        Some(self)
    }
}

// =========================================================
// Owner endpoints
// =========================================================

/// List the pets of one owner
#[derive(Debug, Clone)]
pub struct ListPetsRequest {
    pub user_id: Id,
}

impl ApiRequest for ListPetsRequest {
    type Body = ();
    type Response = Vec<Pet>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const DEFAULT_ERROR: &'static str = "加载宠物列表失败";

    fn path(&self) -> String {
        format!("/pets?userId={}", self.user_id)
    }
}

/// Pet with its appointments and records (shared by owner and admin views)
#[derive(Debug, Clone)]
pub struct GetPetDetailsRequest {
    pub pet_id: Id,
}

impl ApiRequest for GetPetDetailsRequest {
    type Body = ();
    type Response = PetDetails;
    const METHOD: HttpMethod = HttpMethod::Get;
    const DEFAULT_ERROR: &'static str = "未找到该宠物";

    fn path(&self) -> String {
        format!("/admin/pets/{}", self.pet_id)
    }
}

// =========================================================
// Admin: clients
// =========================================================

#[derive(Debug, Clone)]
pub struct ListClientsRequest;

impl ApiRequest for ListClientsRequest {
    type Body = ();
    type Response = Vec<Client>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const DEFAULT_ERROR: &'static str = "加载客户列表失败";

    fn path(&self) -> String {
        "/admin/clients".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct CreateClientRequest(pub NewClient);

impl ApiRequest for CreateClientRequest {
    type Body = NewClient;
    type Response = Client;
    const METHOD: HttpMethod = HttpMethod::Post;
    const DEFAULT_ERROR: &'static str = "创建客户失败";

    fn path(&self) -> String {
        "/admin/clients".to_string()
    }

    fn body(&self) -> Option<&NewClient> {
        Some(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateClientRequest {
    pub id: Id,
    pub update: ClientUpdate,
}

impl ApiRequest for UpdateClientRequest {
    type Body = ClientUpdate;
    type Response = JsonObject;
    const METHOD: HttpMethod = HttpMethod::Put;
    const DEFAULT_ERROR: &'static str = "更新客户失败";

    fn path(&self) -> String {
        format!("/admin/clients/{}", self.id)
    }

    fn body(&self) -> Option<&ClientUpdate> {
        Some(&self.update)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteClientRequest {
    pub id: Id,
}

impl ApiRequest for DeleteClientRequest {
    type Body = ();
    type Response = Acknowledged;
    const METHOD: HttpMethod = HttpMethod::Delete;
    const DEFAULT_ERROR: &'static str = "删除客户失败";

    fn path(&self) -> String {
        format!("/admin/clients/{}", self.id)
    }
}

// =========================================================
// Admin: pets
// =========================================================

/// Create a pet for an owner; the owner id travels inside the body as `userId`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePetRequest {
    #[serde(flatten)]
    pub pet: NewPet,
    pub user_id: Id,
}

impl ApiRequest for CreatePetRequest {
    type Body = Self;
    type Response = Pet;
    const METHOD: HttpMethod = HttpMethod::Post;
    const DEFAULT_ERROR: &'static str = "创建宠物失败";

    fn path(&self) -> String {
        "/admin/pets".to_string()
    }

    fn body(&self) -> Option<&Self> {
        Some(self)
    }
}

#[derive(Debug, Clone)]
pub struct UpdatePetRequest {
    pub id: Id,
    pub update: PetUpdate,
}

impl ApiRequest for UpdatePetRequest {
    type Body = PetUpdate;
    type Response = JsonObject;
    const METHOD: HttpMethod = HttpMethod::Put;
    const DEFAULT_ERROR: &'static str = "更新宠物失败";

    fn path(&self) -> String {
        format!("/admin/pets/{}", self.id)
    }

    fn body(&self) -> Option<&PetUpdate> {
        Some(&self.update)
    }
}

#[derive(Debug, Clone)]
pub struct DeletePetRequest {
    pub id: Id,
}

impl ApiRequest for DeletePetRequest {
    type Body = ();
    type Response = Acknowledged;
    const METHOD: HttpMethod = HttpMethod::Delete;
    const DEFAULT_ERROR: &'static str = "删除宠物失败";

    fn path(&self) -> String {
        format!("/admin/pets/{}", self.id)
    }
}

// =========================================================
// Admin: appointments & records
// =========================================================

#[derive(Debug, Clone)]
pub struct CreateAppointmentRequest(pub NewAppointment);

impl ApiRequest for CreateAppointmentRequest {
    type Body = NewAppointment;
    type Response = Appointment;
    const METHOD: HttpMethod = HttpMethod::Post;
    const DEFAULT_ERROR: &'static str = "添加预约失败";

    fn path(&self) -> String {
        "/admin/appointments".to_string()
    }

    fn body(&self) -> Option<&NewAppointment> {
        Some(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct CreateRecordRequest(pub NewMedicalRecord);

impl ApiRequest for CreateRecordRequest {
    type Body = NewMedicalRecord;
    type Response = MedicalRecord;
    const METHOD: HttpMethod = HttpMethod::Post;
    const DEFAULT_ERROR: &'static str = "添加病历失败";

    fn path(&self) -> String {
        "/admin/records".to_string()
    }

    fn body(&self) -> Option<&NewMedicalRecord> {
        Some(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paths_carry_ids_and_query() {
        assert_eq!(ListPetsRequest { user_id: 1 }.path(), "/pets?userId=1");
        assert_eq!(GetPetDetailsRequest { pet_id: 5 }.path(), "/admin/pets/5");
        assert_eq!(DeleteClientRequest { id: 7 }.path(), "/admin/clients/7");
        assert_eq!(
            UpdatePetRequest {
                id: 3,
                update: PetUpdate::default()
            }
            .path(),
            "/admin/pets/3"
        );
    }

    #[test]
    fn test_create_pet_body_flattens_owner() {
        let req = CreatePetRequest {
            pet: NewPet {
                name: "Toby".into(),
                species: "Perro".into(),
                breed: "Beagle".into(),
            },
            user_id: 2,
        };
        assert_eq!(
            serde_json::to_value(req.body().unwrap()).unwrap(),
            json!({ "name": "Toby", "species": "Perro", "breed": "Beagle", "userId": 2 })
        );
    }

    #[test]
    fn test_error_body_is_optional() {
        let body: ErrorBody = serde_json::from_value(json!({})).unwrap();
        assert!(body.error.is_none());
        let body: ErrorBody = serde_json::from_value(json!({ "error": "not found" })).unwrap();
        assert_eq!(body.error.as_deref(), Some("not found"));
    }
}
