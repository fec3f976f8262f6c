use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone)]
pub enum LeadError {
    Validation(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    FileOperation(String),
    Serialization(String),
    MalformedPayload(String),
}

impl LeadError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LeadError::Validation(_) => "E001",
            LeadError::DatabaseConfig(_) => "E002",
            LeadError::DatabaseConnection(_) => "E003",
            LeadError::DatabaseOperation(_) => "E004",
            LeadError::FileOperation(_) => "E005",
            LeadError::Serialization(_) => "E006",
            LeadError::MalformedPayload(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LeadError::Validation(_) => "Validation Error",
            LeadError::DatabaseConfig(_) => "Database Configuration Error",
            LeadError::DatabaseConnection(_) => "Database Connection Error",
            LeadError::DatabaseOperation(_) => "Database Operation Error",
            LeadError::FileOperation(_) => "File Operation Error",
            LeadError::Serialization(_) => "Serialization Error",
            LeadError::MalformedPayload(_) => "Malformed Payload",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LeadError::Validation(msg)
            | LeadError::DatabaseConfig(msg)
            | LeadError::DatabaseConnection(msg)
            | LeadError::DatabaseOperation(msg)
            | LeadError::FileOperation(msg)
            | LeadError::Serialization(msg)
            | LeadError::MalformedPayload(msg) => msg,
        }
    }

    /// HTTP 状态码映射：只有校验失败是客户端错误，其余一律 500
    pub fn http_status(&self) -> StatusCode {
        match self {
            LeadError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, LeadError::Validation(_))
    }

    /// 格式化为彩色输出（用于 Server 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LeadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LeadError {}

// 便捷的构造函数
impl LeadError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LeadError::Validation(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        LeadError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        LeadError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        LeadError::DatabaseOperation(msg.into())
    }

    pub fn malformed_payload<T: Into<String>>(msg: T) -> Self {
        LeadError::MalformedPayload(msg.into())
    }
}

impl From<sea_orm::DbErr> for LeadError {
    fn from(err: sea_orm::DbErr) -> Self {
        LeadError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for LeadError {
    fn from(err: std::io::Error) -> Self {
        LeadError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LeadError {
    fn from(err: serde_json::Error) -> Self {
        LeadError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for LeadError {
    fn from(err: csv::Error) -> Self {
        LeadError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LeadError>;
