use super::*;

#[test]
fn new_trims_trailing_slash() {
    let config = SupabaseConfig::new("https://abcd.supabase.co/", "anon").unwrap();
    assert_eq!(config.url(), "https://abcd.supabase.co");
    assert_eq!(config.anon_key(), "anon");
}

#[test]
fn new_rejects_blank_url() {
    assert_eq!(
        SupabaseConfig::new("  ", "anon"),
        Err(ConfigError::Missing { var: URL_VAR })
    );
}

#[test]
fn new_rejects_blank_key() {
    assert_eq!(
        SupabaseConfig::new("https://abcd.supabase.co", ""),
        Err(ConfigError::Missing { var: ANON_KEY_VAR })
    );
}

#[test]
fn new_rejects_url_without_scheme() {
    let err = SupabaseConfig::new("abcd.supabase.co", "anon").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    assert!(err.to_string().contains("abcd.supabase.co"));
}

#[test]
fn project_ref_is_first_host_label() {
    let config = SupabaseConfig::new("https://abcd.supabase.co", "anon").unwrap();
    assert_eq!(config.project_ref(), "abcd");
    assert_eq!(config.storage_key(), "sb-abcd-auth-token");
}

#[test]
fn project_ref_ignores_port_and_path() {
    let config = SupabaseConfig::new("http://localhost:54321/", "anon").unwrap();
    assert_eq!(config.project_ref(), "localhost");
}

#[test]
fn auth_endpoint_joins_path() {
    let config = SupabaseConfig::new("https://abcd.supabase.co", "anon").unwrap();
    assert_eq!(
        config.auth_endpoint("token?grant_type=password"),
        "https://abcd.supabase.co/auth/v1/token?grant_type=password"
    );
}
