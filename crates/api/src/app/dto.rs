use serde::{Deserialize, Serialize};

use stockpile_core::PageRequest;

/// Success envelope: `{message, data}`, `data` omitted when absent.
#[derive(Debug, Serialize)]
pub struct GenericResponse<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> GenericResponse<T> {
    pub fn with_data(message: &str, data: T) -> Self {
        Self {
            message: message.to_string(),
            data: Some(data),
        }
    }
}

impl GenericResponse<()> {
    pub fn message_only(message: &str) -> Self {
        Self {
            message: message.to_string(),
            data: None,
        }
    }
}

/// Query parameters for listings; names match the original API surface.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(rename = "pageNo", default)]
    pub page_no: usize,
    #[serde(rename = "pageSize", default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    PageRequest::DEFAULT_PAGE_SIZE
}

impl From<PageParams> for PageRequest {
    fn from(params: PageParams) -> Self {
        PageRequest::new(params.page_no, params.page_size)
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub price: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub price: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateInventoryRequest {
    pub item_id: String,
    pub stock: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInventoryRequest {
    pub stock: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    pub item_id: String,
    pub qty: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTransactionRequest {
    pub qty: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub item_id: String,
    pub qty: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    pub qty: Option<i64>,
}
