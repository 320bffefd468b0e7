use sales_monitor::{handler::describe, on_message, parse_sales_event};

#[test]
fn every_well_formed_event_yields_one_line_with_both_fields() {
    let bodies = [
        (r#"{"product_name":"Coke Can","qty":1}"#, "Coke Can", "1"),
        (r#"{"qty":40,"product_name":"Shan Noodles","price":3500}"#, "Shan Noodles", "40"),
        (r#"{"product_name":"","qty":0}"#, "", "0"),
        (r#"{"product_name":"Tea Leaf Salad","qty":-2,"sold_at":null}"#, "Tea Leaf Salad", "-2"),
        (r#"{"product_name":1,"qty":1}"#, "1", "1"),
        (r#"{"product_name":"Coke","qty":"one"}"#, "Coke", "one"),
        (r#"{"product_name":"Coke Can","qty":null}"#, "Coke Can", "null"),
        ("\u{feff}{\"product_name\":\"Tea\",\"qty\":2}", "Tea", "2"),
    ];

    for (body, name, qty) in bodies {
        let event = on_message(body.as_bytes()).expect("well-formed body");
        let line = describe(&event);
        assert_eq!(line.lines().count(), 1);
        assert!(line.contains(&format!("Received: {name} |")));
        assert!(line.ends_with(&format!("Qty: {qty}")));
    }
}

#[test]
fn malformed_bodies_never_panic() {
    let bodies = [
        "",
        "null",
        r#"["Coke Can",1]"#,
        r#"{"product_name":"Coke"}"#,
        r#"{"product":"Coke","quantity":1}"#,
    ];

    for body in bodies {
        assert!(parse_sales_event(body.as_bytes()).is_err());
        assert!(on_message(body.as_bytes()).is_none());
    }

    assert!(on_message(&[0xff, 0xfe, 0x00]).is_none());
}
