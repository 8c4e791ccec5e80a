use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const STORAGE_TOKEN_KEY: &str = "userToken";
pub const STORAGE_USER_KEY: &str = "userData";
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_APPOINTMENT_STATUS: &str = "Pendiente";

/// 所有实体的主键类型
pub type Id = u64;

/// 可按 id 定位的实体（用于本地缓存的增删改）
pub trait Entity {
    fn id(&self) -> Id;
}

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// 会话中的用户资料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// 管理端看到的客户（宠物主人），附带其宠物列表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    // 创建/更新接口不返回宠物列表
    #[serde(default)]
    pub pets: Vec<Pet>,
}

impl Client {
    pub fn pet(&self, pet_id: Id) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == pet_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: Id,
    pub user_id: Id,
    pub name: String,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub breed: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Id,
    pub pet_id: Id,
    #[serde(with = "date::datetime")]
    pub date: NaiveDateTime,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: Id,
    pub pet_id: Id,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(with = "date::day")]
    pub date: NaiveDate,
}

/// 宠物详情聚合：宠物本身 + 预约 + 病历
///
/// 每次进入详情页时拉取，离开或显式清除时丢弃。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetDetails {
    pub pet: Pet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<User>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub records: Vec<MedicalRecord>,
}

impl Entity for User {
    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for Client {
    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for Pet {
    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for Appointment {
    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for MedicalRecord {
    fn id(&self) -> Id {
        self.id
    }
}

// =========================================================
// 写入载荷 (Write Payloads)
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPet {
    pub name: String,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub breed: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PetUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub pet_id: Id,
    #[serde(with = "date::datetime")]
    pub date: NaiveDateTime,
    pub reason: String,
    #[serde(default)]
    pub status: String,
}

impl NewAppointment {
    pub fn new(pet_id: Id, date: NaiveDateTime, reason: impl Into<String>) -> Self {
        Self {
            pet_id,
            date,
            reason: reason.into(),
            status: DEFAULT_APPOINTMENT_STATUS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMedicalRecord {
    pub pet_id: Id,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(with = "date::day")]
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_tolerates_missing_profile_fields() {
        let user: User = serde_json::from_value(json!({ "id": 1, "role": "user" })).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.role, Role::User);
        assert!(user.name.is_empty());

        let admin: User = serde_json::from_value(json!({ "id": 99, "role": "admin" })).unwrap();
        assert!(admin.role.is_admin());
    }

    #[test]
    fn test_client_without_pets_defaults_to_empty() {
        let client: Client =
            serde_json::from_value(json!({ "id": 2, "name": "Ana", "email": "ana@garcia.com" }))
                .unwrap();
        assert!(client.pets.is_empty());
    }

    #[test]
    fn test_pet_details_wire_format() {
        let details: PetDetails = serde_json::from_value(json!({
            "pet": { "id": 1, "userId": 1, "name": "Rex", "species": "Perro", "breed": "Pastor Alemán" },
            "appointments": [
                { "id": 1, "petId": 1, "date": "2025-11-10T10:00:00", "reason": "Chequeo anual", "status": "Pendiente" }
            ],
            "records": [
                { "id": 1, "petId": 1, "type": "Vacuna", "name": "Rabia (Anual)", "date": "2024-12-15" }
            ]
        }))
        .unwrap();

        assert_eq!(details.pet.user_id, 1);
        assert_eq!(details.appointments[0].pet_id, 1);
        assert_eq!(details.records[0].kind, "Vacuna");
        assert!(details.owner.is_none());

        let value = serde_json::to_value(&details.records[0]).unwrap();
        assert_eq!(value["type"], "Vacuna");
        assert_eq!(value["petId"], 1);
    }

    #[test]
    fn test_update_payload_skips_unset_fields() {
        let update = ClientUpdate {
            name: Some("Ana María".into()),
            email: None,
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "name": "Ana María" })
        );
    }
}
