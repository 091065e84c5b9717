use rust_decimal::Decimal;

use super::*;
use crate::products::ProductId;

fn product(id: &str, name: &str, category: &str, price: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        price: Decimal::new(price, 0),
        description: None,
        image_url: None,
    }
}

fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}

fn prices(products: &[Product]) -> Vec<Decimal> {
    products.iter().map(|p| p.price).collect()
}

fn catalog() -> Vec<Product> {
    vec![
        product("1", "Kopi Hitam", "minuman", 8_000),
        product("2", "Nasi Goreng", "makanan", 20_000),
        product("3", "kopi susu", "minuman", 12_000),
        product("4", "Es Teh", "minuman", 5_000),
        product("5", "Mie Ayam", "makanan", 15_000),
    ]
}

fn filter(search: &str, category: &str, sort_key: SortKey) -> ViewFilter {
    ViewFilter {
        search_text: search.to_string(),
        category: category.to_string(),
        sort_key,
    }
}

// -----------------------------------------------------------------------
// derive: filtering
// -----------------------------------------------------------------------

#[test]
fn default_filter_returns_input_unchanged() {
    let products = catalog();
    assert_eq!(derive(&products, &ViewFilter::default()), products);
}

#[test]
fn search_is_case_insensitive_substring() {
    let products = catalog();
    let out = derive(&products, &filter("KOPI", ALL_CATEGORIES, SortKey::Default));
    assert_eq!(ids(&out), vec!["1", "3"]);
}

#[test]
fn search_matches_inside_words() {
    let products = catalog();
    let out = derive(&products, &filter("ore", ALL_CATEGORIES, SortKey::Default));
    assert_eq!(ids(&out), vec!["2"]);
}

#[test]
fn category_filter_is_exact() {
    let products = catalog();
    let out = derive(&products, &filter("", "makanan", SortKey::Default));
    assert_eq!(ids(&out), vec!["2", "5"]);

    let none = derive(&products, &filter("", "Makanan", SortKey::Default));
    assert!(none.is_empty(), "category match must be case-sensitive");
}

#[test]
fn search_and_category_combine_with_and() {
    let products = catalog();
    let out = derive(&products, &filter("a", "makanan", SortKey::Default));
    assert_eq!(ids(&out), vec!["2", "5"]);

    let out = derive(&products, &filter("kopi", "makanan", SortKey::Default));
    assert!(out.is_empty());
}

#[test]
fn unknown_category_yields_empty() {
    let products = catalog();
    assert!(derive(&products, &filter("", "elektronik", SortKey::Default)).is_empty());
}

#[test]
fn derive_is_idempotent() {
    let products = catalog();
    let f = filter("i", "minuman", SortKey::PriceDesc);
    let once = derive(&products, &f);
    let twice = derive(&once, &f);
    assert_eq!(once, twice);
}

// -----------------------------------------------------------------------
// derive: sorting
// -----------------------------------------------------------------------

#[test]
fn price_sorts_ascending_then_descending() {
    let products = vec![
        product("a", "A", "x", 30),
        product("b", "B", "x", 10),
        product("c", "C", "x", 20),
    ];

    let asc = derive(&products, &filter("", ALL_CATEGORIES, SortKey::PriceAsc));
    assert_eq!(
        prices(&asc),
        vec![Decimal::new(10, 0), Decimal::new(20, 0), Decimal::new(30, 0)]
    );

    let desc = derive(&asc, &filter("", ALL_CATEGORIES, SortKey::PriceDesc));
    assert_eq!(
        prices(&desc),
        vec![Decimal::new(30, 0), Decimal::new(20, 0), Decimal::new(10, 0)]
    );
}

#[test]
fn price_sort_is_stable_for_equal_prices() {
    let products = vec![
        product("a", "A", "x", 10),
        product("b", "B", "x", 5),
        product("c", "C", "x", 10),
        product("d", "D", "x", 5),
    ];

    let asc = derive(&products, &filter("", ALL_CATEGORIES, SortKey::PriceAsc));
    assert_eq!(ids(&asc), vec!["b", "d", "a", "c"]);

    let desc = derive(&products, &filter("", ALL_CATEGORIES, SortKey::PriceDesc));
    assert_eq!(ids(&desc), vec!["a", "c", "b", "d"]);
}

#[test]
fn name_sort_ignores_case() {
    let products = catalog();
    let asc = derive(&products, &filter("", ALL_CATEGORIES, SortKey::NameAsc));
    assert_eq!(ids(&asc), vec!["4", "1", "3", "5", "2"]);

    let desc = derive(&products, &filter("", ALL_CATEGORIES, SortKey::NameDesc));
    assert_eq!(ids(&desc), vec!["2", "5", "3", "1", "4"]);
}

#[test]
fn name_sort_is_stable_for_identical_names() {
    let products = vec![
        product("a", "Sama", "x", 1),
        product("b", "Beda", "x", 1),
        product("c", "Sama", "x", 1),
    ];
    let asc = derive(&products, &filter("", ALL_CATEGORIES, SortKey::NameAsc));
    assert_eq!(ids(&asc), vec!["b", "a", "c"]);
    let desc = derive(&products, &filter("", ALL_CATEGORIES, SortKey::NameDesc));
    assert_eq!(ids(&desc), vec!["a", "c", "b"]);
}

#[test]
fn sort_applies_after_filter() {
    let products = catalog();
    let out = derive(&products, &filter("", "minuman", SortKey::PriceAsc));
    assert_eq!(ids(&out), vec!["4", "1", "3"]);
}

#[test]
fn sort_key_parses_wire_names() {
    for key in SortKey::ALL {
        assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
    }
    assert!("cheapest".parse::<SortKey>().is_err());
}

#[test]
fn sort_key_serde_uses_wire_names() {
    let json = serde_json::to_string(&SortKey::PriceDesc).unwrap();
    assert_eq!(json, "\"price-desc\"");
}

// -----------------------------------------------------------------------
// categories
// -----------------------------------------------------------------------

#[test]
fn categories_lists_all_then_first_seen_order() {
    assert_eq!(categories(&catalog()), vec!["all", "minuman", "makanan"]);
}

#[test]
fn categories_of_empty_list_is_just_all() {
    assert_eq!(categories(&[]), vec!["all"]);
}

// -----------------------------------------------------------------------
// featured
// -----------------------------------------------------------------------

#[test]
fn featured_caps_each_category_at_three() {
    let mut products = Vec::new();
    for i in 0..5 {
        products.push(product(&format!("a{i}"), "A", "alpha", 1));
        products.push(product(&format!("b{i}"), "B", "beta", 1));
    }

    let out = featured(&products);

    assert_eq!(out.len(), 6);
    assert_eq!(ids(&out), vec!["a0", "a1", "a2", "b0", "b1", "b2"]);
}

#[test]
fn featured_keeps_first_seen_category_order() {
    let products = vec![
        product("1", "x", "beta", 1),
        product("2", "x", "alpha", 1),
        product("3", "x", "beta", 1),
    ];
    assert_eq!(ids(&featured(&products)), vec!["1", "3", "2"]);
}

#[test]
fn featured_ignores_view_filter_state() {
    let products = catalog();
    let grouped = featured(&products);
    assert_eq!(ids(&grouped), vec!["1", "3", "4", "2", "5"]);
}

#[test]
fn featured_of_empty_list_is_empty() {
    assert!(featured(&[]).is_empty());
}

#[test]
fn matching_filters_without_sorting() {
    let products = catalog();
    let f = filter("", "all", SortKey::PriceDesc);
    assert_eq!(matching(&products, &f), products);
}

#[test]
fn matching_over_featured_keeps_grouped_order() {
    let products = vec![
        product("1", "Kopi Susu", "minuman", 15_000),
        product("2", "Es Kopi", "minuman", 12_000),
        product("3", "Roti Kopi", "makanan", 8_000),
        product("4", "Teh", "minuman", 5_000),
        product("5", "Kopi Tubruk", "minuman", 9_000),
    ];
    let grouped = featured(&products);

    let hits = matching(&grouped, &filter("KOPI", "all", SortKey::NameAsc));
    assert_eq!(ids(&hits), vec!["1", "2", "3"]);

    let drinks = matching(&grouped, &filter("", "minuman", SortKey::Default));
    assert_eq!(ids(&drinks), vec!["1", "2", "4"]);
}
