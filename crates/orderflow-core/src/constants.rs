/// Workbook and export constants

/// Checkbox-augmented view of pending items
pub const REQUESTED_TABLE: &str = "Requested";

/// Authoritative intake rows, positionally aligned with the requested view
pub const RAW_RESPONSES_TABLE: &str = "Raw Responses";

pub const APPROVED_TABLE: &str = "Approved";
pub const ORDERED_TABLE: &str = "Ordered";

/// Absolute index of the first row below the header
pub const FIRST_DATA_ROW: usize = 1;

/// Cell delimiter of the order CSV. Two characters so commas in free-form fields survive.
pub const CSV_DELIMITER: &str = "||";

pub const ORDER_FILE_PREFIX: &str = "Order_";

/// Multipart field the order server reads the CSV from
pub const UPLOAD_FIELD_NAME: &str = "file";
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Rendering of timestamps in exported cells
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const DEFAULT_ORDER_ENDPOINT: &str = "https://orders.example.com/upload";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_WORKBOOK_PATH: &str = "workbook.json";
