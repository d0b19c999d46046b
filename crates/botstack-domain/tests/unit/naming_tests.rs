//! Unit tests for the naming configuration and derived values

use botstack_domain::naming::ResourceNames;

fn names() -> ResourceNames {
    ResourceNames::default()
}

#[test]
fn test_default_names_validate() {
    names().validate().expect("default names must validate");
}

#[test]
fn test_messaging_endpoint_shape() {
    let names = ResourceNames {
        web_app: "contoso-bot-app".to_string(),
        ..names()
    };
    assert_eq!(
        names.messaging_endpoint(),
        "https://contoso-bot-app.azurewebsites.net/api/messages"
    );
}

#[test]
fn test_messaging_endpoint_tracks_web_app_name() {
    // Derived values follow the declared name; no free-floating templates.
    let mut names = names();
    names.web_app = "renamed".to_string();
    assert!(names.messaging_endpoint().starts_with("https://renamed."));
}

#[test]
fn test_search_endpoint_derives_from_search_name() {
    assert_eq!(
        names().search_endpoint(),
        "https://botstack-search.search.windows.net"
    );
}

#[test]
fn test_vault_uri_has_trailing_slash() {
    assert!(names().vault_uri().ends_with('/'));
}

#[test]
fn test_ai_endpoint_shape() {
    assert_eq!(
        names().ai_endpoint(),
        "https://botstack-openai.openai.azure.com/"
    );
}

#[test]
fn test_storage_name_must_be_lowercase_alphanumeric() {
    let mut bad = names();
    bad.storage = "Bot-Stack".to_string();
    assert!(bad.validate().is_err());
}

#[test]
fn test_empty_name_is_rejected() {
    let mut bad = names();
    bad.search = String::new();
    assert!(bad.validate().is_err());
}
