#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub uuid: String,
    pub name: String,
    pub nickname: String,
}

/// Client-writable fields of a person. The identifier is never part of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonFields {
    pub name: String,
    pub nickname: String,
}

impl Person {
    pub fn new(uuid: impl Into<String>, fields: PersonFields) -> Self {
        Self {
            uuid: uuid.into(),
            name: fields.name,
            nickname: fields.nickname,
        }
    }
}
