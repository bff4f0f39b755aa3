//! Tab labels and detail-tab keys.
//!
//! List tabs use the module key (`a006_order`); detail tabs append
//! `_detail_{id}` (`a006_order_detail_42`).

const DETAIL_INFIX: &str = "_detail_";

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d400_overview" => "Overview",
        "a001_admin" => "Admins",
        "a002_category" => "Categories",
        "a003_subcategory" => "Subcategories",
        "a004_provider" => "Providers",
        "a004_provider_map" => "Provider Map",
        "a005_user" => "Users",
        "a006_order" => "Orders",
        "a007_payment" => "Payments",
        "a008_product" => "Products",
        "a009_service" => "Services",
        _ => "",
    }
}

/// Singular entity name used in detail tab titles.
pub fn entity_element_name(aggregate_key: &str) -> &'static str {
    match aggregate_key {
        "a005_user" => "User",
        "a006_order" => "Order",
        "a007_payment" => "Payment",
        "a008_product" => "Product",
        "a009_service" => "Service",
        _ => "",
    }
}

/// `detail_tab_label("Order", "42")` → `"Order #42"`
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} #{}", entity_label, identifier)
}

pub fn detail_key(aggregate_key: &str, id: i64) -> String {
    format!("{}{}{}", aggregate_key, DETAIL_INFIX, id)
}

/// Splits `a006_order_detail_42` into `("a006_order", 42)`.
pub fn parse_detail_key(key: &str) -> Option<(&str, i64)> {
    let (aggregate, id) = key.rsplit_once(DETAIL_INFIX)?;
    let id = id.parse().ok()?;
    Some((aggregate, id))
}

/// Title for any tab key; unknown keys fall back to the key itself.
pub fn title_for_key(key: &str) -> String {
    if let Some((aggregate, id)) = parse_detail_key(key) {
        let entity = entity_element_name(aggregate);
        if !entity.is_empty() {
            return detail_tab_label(entity, &id.to_string());
        }
    }
    match tab_label_for_key(key) {
        "" => key.to_string(),
        label => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_keys() {
        let key = detail_key("a006_order", 42);
        assert_eq!(key, "a006_order_detail_42");
        assert_eq!(parse_detail_key(&key), Some(("a006_order", 42)));
        assert_eq!(parse_detail_key("a006_order"), None);
        assert_eq!(parse_detail_key("a006_order_detail_abc"), None);
    }

    #[test]
    fn test_titles() {
        assert_eq!(title_for_key("a007_payment"), "Payments");
        assert_eq!(title_for_key("a007_payment_detail_9"), "Payment #9");
        assert_eq!(title_for_key("mystery"), "mystery");
    }
}
