use serde::{Deserialize, Serialize};

/// Order lifecycle. Encoded on the wire as the numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum OrderStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
    InProgress,
    Completed,
    Refunded,
    Unknown(i32),
}

impl OrderStatus {
    pub fn code(&self) -> i32 {
        match self {
            OrderStatus::Pending => 1,
            OrderStatus::Approved => 2,
            OrderStatus::Rejected => 3,
            OrderStatus::Cancelled => 4,
            OrderStatus::InProgress => 5,
            OrderStatus::Completed => 6,
            OrderStatus::Refunded => 7,
            OrderStatus::Unknown(code) => *code,
        }
    }

    pub fn from_code(code: i32) -> Self {
        match code {
            1 => OrderStatus::Pending,
            2 => OrderStatus::Approved,
            3 => OrderStatus::Rejected,
            4 => OrderStatus::Cancelled,
            5 => OrderStatus::InProgress,
            6 => OrderStatus::Completed,
            7 => OrderStatus::Refunded,
            other => OrderStatus::Unknown(other),
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            OrderStatus::Pending => "Pending".to_string(),
            OrderStatus::Approved => "Approved".to_string(),
            OrderStatus::Rejected => "Rejected".to_string(),
            OrderStatus::Cancelled => "Cancelled".to_string(),
            OrderStatus::InProgress => "In Progress".to_string(),
            OrderStatus::Completed => "Completed".to_string(),
            OrderStatus::Refunded => "Refunded".to_string(),
            OrderStatus::Unknown(code) => format!("Status {}", code),
        }
    }

    /// CSS modifier used by the status badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "badge--yellow",
            OrderStatus::Approved => "badge--blue",
            OrderStatus::Rejected => "badge--dark-red",
            OrderStatus::Cancelled => "badge--red",
            OrderStatus::InProgress => "badge--orange",
            OrderStatus::Completed => "badge--green",
            OrderStatus::Refunded => "badge--purple",
            OrderStatus::Unknown(_) => "badge--gray",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Rejected
                | OrderStatus::Cancelled
                | OrderStatus::Completed
                | OrderStatus::Refunded
        )
    }

    /// Every known status, in code order. Used by filters and the status editor.
    pub fn all() -> Vec<OrderStatus> {
        (1..=7).map(OrderStatus::from_code).collect()
    }
}

impl From<i32> for OrderStatus {
    fn from(code: i32) -> Self {
        OrderStatus::from_code(code)
    }
}

impl From<OrderStatus> for i32 {
    fn from(status: OrderStatus) -> Self {
        status.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_json() {
        let status: OrderStatus = serde_json::from_str("5").unwrap();
        assert_eq!(status, OrderStatus::InProgress);
        assert_eq!(serde_json::to_string(&OrderStatus::Refunded).unwrap(), "7");
    }

    #[test]
    fn test_unknown_code_label() {
        let status = OrderStatus::from_code(42);
        assert_eq!(status.display_name(), "Status 42");
        assert_eq!(status.code(), 42);
        assert!(!status.is_terminal());
    }

    #[test]
    fn test_all_lists_seven_known() {
        let all = OrderStatus::all();
        assert_eq!(all.len(), 7);
        assert!(all.iter().all(|s| !matches!(s, OrderStatus::Unknown(_))));
    }
}
