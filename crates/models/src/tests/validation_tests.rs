use crate::errors::ModelError;
use crate::{brand, category, color, comment, garment, outfit, recommendation, store, user, wishlist};

fn is_validation<T>(r: Result<T, ModelError>) -> bool {
    matches!(r, Err(ModelError::Validation(_)))
}

#[test]
fn user_email_requires_both_sides_of_at() {
    assert_eq!(user::validate_email("  Ana@Example.com ").unwrap(), "ana@example.com");
    assert!(is_validation(user::validate_email("ana.example.com")));
    assert!(is_validation(user::validate_email("@example.com")));
    assert!(is_validation(user::validate_email("ana@")));
    assert!(is_validation(user::validate_email("   ")));
}

#[test]
fn blank_names_are_rejected() {
    assert!(is_validation(user::validate_name(" ")));
    assert!(is_validation(category::validate_name("")));
    assert!(is_validation(outfit::validate_name("\t")));
    assert_eq!(brand::validate_name("  Zara ").unwrap(), "Zara");
}

#[test]
fn color_hex_code_format() {
    assert_eq!(color::validate_hex_code("#a1B2c3").unwrap(), "#a1B2c3");
    assert!(is_validation(color::validate_hex_code("a1b2c3")));
    assert!(is_validation(color::validate_hex_code("#a1b2c")));
    assert!(is_validation(color::validate_hex_code("#a1b2c3d")));
    assert!(is_validation(color::validate_hex_code("#gggggg")));
}

#[test]
fn comment_rating_bounds() {
    assert!(comment::validate_rating(0.0).is_ok());
    assert!(comment::validate_rating(5.0).is_ok());
    assert!(comment::validate_rating(3.5).is_ok());
    assert!(is_validation(comment::validate_rating(-0.1)));
    assert!(is_validation(comment::validate_rating(5.01)));
    assert!(is_validation(comment::validate_rating(f64::NAN)));
}

#[test]
fn recommendation_rating_bounds() {
    assert!(recommendation::validate_rating(1).is_ok());
    assert!(recommendation::validate_rating(5).is_ok());
    assert!(is_validation(recommendation::validate_rating(0)));
    assert!(is_validation(recommendation::validate_rating(6)));
}

#[test]
fn garment_prices() {
    let g = garment::validate(" Shirt ", "top", Some(" "), 30.0, Some(20.0)).unwrap();
    assert_eq!(g.name, "Shirt");
    assert_eq!(g.size, None);
    assert!(garment::validate("Shirt", "top", None, 30.0, Some(30.0)).is_ok());
    assert!(is_validation(garment::validate("Shirt", "top", None, 30.0, Some(31.0))));
    assert!(is_validation(garment::validate("Shirt", "top", None, -1.0, None)));
    assert!(is_validation(garment::validate("Shirt", " ", None, 1.0, None)));
}

#[test]
fn category_age_range() {
    assert!(category::validate_recommended_age(None).is_ok());
    assert!(category::validate_recommended_age(Some(0)).is_ok());
    assert!(category::validate_recommended_age(Some(120)).is_ok());
    assert!(is_validation(category::validate_recommended_age(Some(-1))));
    assert!(is_validation(category::validate_recommended_age(Some(121))));
}

#[test]
fn store_requires_name_and_location() {
    let s = store::validate("Centro", " Calle 1 ", Some(""), "Madrid").unwrap();
    assert_eq!(s.address, "Calle 1");
    assert_eq!(s.opening_hours, None);
    assert!(is_validation(store::validate("Centro", "", None, " ")));
}

#[test]
fn brand_links_must_be_http() {
    assert_eq!(brand::validate_link("logo_url", None).unwrap(), None);
    assert_eq!(brand::validate_link("logo_url", Some(" ")).unwrap(), None);
    assert!(brand::validate_link("official_site", Some("https://zara.com")).is_ok());
    assert!(is_validation(brand::validate_link("official_site", Some("zara.com"))));
}

#[test]
fn wishlist_default_name() {
    assert_eq!(wishlist::name_or_default(None), wishlist::DEFAULT_NAME);
    assert_eq!(wishlist::name_or_default(Some("  ")), wishlist::DEFAULT_NAME);
    assert_eq!(wishlist::name_or_default(Some("Summer")), "Summer");
}
