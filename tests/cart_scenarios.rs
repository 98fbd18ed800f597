use cartel::{
    CartEngine, Money, format_locale_money, multiply_money, parse_locale_money, sum_money,
    events::quantity_change::QuantityEvent,
    handlers::cart_page::{CartPage, CheckoutGate},
    models::cart_snapshot::CartSnapshot,
    utils::display::TerminalDisplay,
};

const CART: &str = r#"{
  "items": [
    { "id": "green-tea", "price": "9,99", "currency": "руб.", "quantity": "1", "subtotal": "9,99 руб." },
    { "id": "kettle", "price": "1.234,56", "currency": "", "quantity": "1", "subtotal": "1234,56 руб." }
  ],
  "total": { "currency": "руб.", "original_total": "1.244,55", "text": "1244,55 руб." }
}"#;

fn page() -> CartPage<TerminalDisplay> {
    let snapshot = CartSnapshot::from_json(CART).unwrap();
    CartPage::new(CartEngine::from_snapshot(&snapshot), TerminalDisplay, "шт.")
}

#[test]
fn stepping_tea_to_three_updates_totals() {
    let mut page = page();
    page.render();

    let mut last = None;
    for _ in 0..2 {
        last = Some(page.apply(&"green-tea:+1".parse::<QuantityEvent>().unwrap()).unwrap());
    }
    let update = last.unwrap();

    assert_eq!(format_locale_money(update.subtotal), "29,97");
    assert_eq!(format_locale_money(update.grand_total), "1264,53");
    assert_eq!(update.grand_total_text, "1264,53 руб.");
    assert_eq!(update.item_count, 4);
    assert_eq!(page.engine().items()[1].currency, "руб.");
}

#[test]
fn grand_total_is_sum_of_displayed_subtotals() {
    let mut page = page();
    page.apply(&"green-tea:=7".parse().unwrap()).unwrap();
    page.apply(&"kettle=3".parse().unwrap()).unwrap();

    let summary = page.engine().summary();
    let shown: Money = sum_money(
        summary
            .items
            .iter()
            .map(|item| parse_locale_money(&item.subtotal)),
    );

    assert_eq!(format_locale_money(shown), summary.grand_total);
    assert_eq!(
        page.engine().grand_total(),
        multiply_money(parse_locale_money("9,99"), 7) + multiply_money(parse_locale_money("1.234,56"), 3)
    );
}

#[test]
fn out_of_range_requests_clamp_without_error() {
    let mut page = page();

    let low = page.apply(&"green-tea:=0".parse().unwrap()).unwrap();
    assert_eq!(low.quantity, 1);
    assert!(!low.stepper.decrement_enabled);

    let high = page.apply(&"green-tea=150".parse().unwrap()).unwrap();
    assert_eq!(high.quantity, 99);
    assert!(!high.stepper.increment_enabled);

    let typed = page.apply(&"green-tea=".parse().unwrap()).unwrap();
    assert_eq!(typed.quantity, 1);
}

#[test]
fn checkout_gate_follows_pending_changes() {
    let mut page = page();
    page.apply(&"kettle:+1".parse().unwrap()).unwrap();
    assert_eq!(
        page.checkout(),
        CheckoutGate::ConfirmUnsaved {
            items: vec!["kettle".to_string()]
        }
    );

    let back = page.apply(&"kettle:-1".parse().unwrap()).unwrap();
    assert!(!back.pending);
    assert_eq!(page.checkout(), CheckoutGate::Proceed);
}

#[test]
fn malformed_money_reads_as_zero() {
    assert_eq!(parse_locale_money(""), Money::ZERO);
    assert_eq!(parse_locale_money("abc"), Money::ZERO);
}
