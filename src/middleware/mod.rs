pub mod record_id;
pub mod upload_request;
