use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;
use thiserror::Error;

/// A raw item as returned by DynamoDB: attribute name to type-tagged value.
pub type RawItem = HashMap<String, AttributeValue>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("attribute `{0}` is missing")]
    Missing(&'static str),
    #[error("attribute `{0}` is not a string")]
    NotString(&'static str),
}

fn string_attr(item: &RawItem, name: &'static str) -> Result<String, DecodeError> {
    match item.get(name) {
        Some(AttributeValue::S(value)) => Ok(value.clone()),
        Some(_) => Err(DecodeError::NotString(name)),
        None => Err(DecodeError::Missing(name)),
    }
}

/// One row of the message-group index (`pk = GRP#<user>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MessageGroupRecord {
    pub(crate) sk: String,
    pub(crate) message_group_uuid: String,
    pub(crate) user_display_name: String,
    pub(crate) user_handle: String,
    pub(crate) message: String,
}

impl TryFrom<&RawItem> for MessageGroupRecord {
    type Error = DecodeError;

    fn try_from(item: &RawItem) -> Result<Self, Self::Error> {
        Ok(Self {
            sk: string_attr(item, "sk")?,
            message_group_uuid: string_attr(item, "message_group_uuid")?,
            user_display_name: string_attr(item, "user_display_name")?,
            user_handle: string_attr(item, "user_handle")?,
            message: string_attr(item, "message")?,
        })
    }
}

impl From<MessageGroupRecord> for crate::domain::message_group::MessageGroup {
    fn from(record: MessageGroupRecord) -> Self {
        Self {
            uuid: record.message_group_uuid,
            display_name: record.user_display_name,
            handle: record.user_handle,
            message: record.message,
            created_at: record.sk,
        }
    }
}
