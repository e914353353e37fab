// ==========================================
// RecordNormalizer 规范化测试
// ==========================================
// 覆盖范围: 订单号规范化、宽松数值解析的静默降级、
//           可选映射缺省、默认成本落位
// ==========================================

use bigdecimal::BigDecimal;
use order_recon_rust::models::{FieldMapping, RawRow, Source};
use order_recon_rust::service::normalizer::{normalize_order_no, normalize_rows, to_number};
use serde_json::json;
use std::str::FromStr;

fn raw_row(pairs: &[(&str, serde_json::Value)]) -> RawRow {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn service_mapping() -> FieldMapping {
    FieldMapping {
        order_no: "订单号".to_string(),
        status: String::new(),
        product_name: "商品".to_string(),
        sales_amount: "销售额".to_string(),
        cost_amount: String::new(),
    }
}

#[test]
fn order_no_strips_all_whitespace() {
    assert_eq!(normalize_order_no("  A 10 01  "), "A1001");
    assert_eq!(normalize_order_no("\t20260826\n"), "20260826");
    assert_eq!(normalize_order_no("   "), "");
}

#[test]
fn to_number_strips_currency_marks_and_separators() {
    let zero = BigDecimal::from(0);
    assert_eq!(to_number("¥1,234.50", &zero), BigDecimal::from_str("1234.50").unwrap());
    assert_eq!(to_number("￥88", &zero), BigDecimal::from(88));
    assert_eq!(to_number(" 1 000 ", &zero), BigDecimal::from(1000));
    assert_eq!(to_number("-12.3", &zero), BigDecimal::from_str("-12.3").unwrap());
}

#[test]
fn to_number_degrades_to_default_silently() {
    // 脏数值不报错, 归到默认值; 这会低估利润, 是有意的取舍
    let default = BigDecimal::from(10);
    assert_eq!(to_number("", &default), default);
    assert_eq!(to_number("N/A", &default), default);
    assert_eq!(to_number("面议", &default), default);
}

#[test]
fn unmapped_cost_takes_default_for_every_row() {
    let rows = vec![
        raw_row(&[("订单号", json!("A1")), ("商品", json!("玩具")), ("销售额", json!(100))]),
        raw_row(&[("订单号", json!("A2")), ("商品", json!("抱枕")), ("销售额", json!(50))]),
    ];
    let records = normalize_rows(
        &rows,
        &service_mapping(),
        Source::Service,
        &BigDecimal::from(15),
    )
    .unwrap();

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.cost_amount == BigDecimal::from(15)));
    assert!(records.iter().all(|r| r.status.is_none()));
}

#[test]
fn mapped_cost_falls_back_to_default_when_unparseable() {
    let mut mapping = service_mapping();
    mapping.cost_amount = "成本".to_string();

    let rows = vec![
        raw_row(&[
            ("订单号", json!("A1")),
            ("商品", json!("玩具")),
            ("销售额", json!(100)),
            ("成本", json!("60")),
        ]),
        raw_row(&[
            ("订单号", json!("A2")),
            ("商品", json!("抱枕")),
            ("销售额", json!(50)),
            ("成本", json!("待定")),
        ]),
    ];
    let records =
        normalize_rows(&rows, &mapping, Source::Service, &BigDecimal::from(10)).unwrap();

    assert_eq!(records[0].cost_amount, BigDecimal::from(60));
    assert_eq!(records[1].cost_amount, BigDecimal::from(10));
}

#[test]
fn numeric_cells_accept_json_numbers_and_null() {
    let rows = vec![raw_row(&[
        ("订单号", json!(1001)),
        ("商品", json!(null)),
        ("销售额", json!(99.5)),
    ])];
    let records = normalize_rows(
        &rows,
        &service_mapping(),
        Source::Service,
        &BigDecimal::from(0),
    )
    .unwrap();

    assert_eq!(records[0].order_no, "1001");
    assert_eq!(records[0].product_name, "");
    assert_eq!(records[0].sales_amount, BigDecimal::from_str("99.5").unwrap());
}
