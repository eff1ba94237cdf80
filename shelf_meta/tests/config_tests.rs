use figment::Jail;
use shelf_meta::{Config, CoverSize};

#[test]
fn config_defaults_without_file() {
    Jail::expect_with(|_jail| {
        let config = Config::load("missing.toml").map_err(|e| e.to_string())?;
        assert!(config.aladin.enabled);
        assert_eq!(
            config.aladin.endpoint,
            "http://www.aladin.co.kr/ttb/api/ItemSearch.aspx"
        );
        assert_eq!(config.aladin.api_key, "ttbsonginha22141002");
        assert_eq!(config.aladin.max_results, 20);
        assert_eq!(config.aladin.cover_size, CoverSize::Big);
        Ok(())
    });
}

#[test]
fn config_reads_toml_and_env() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "shelf.toml",
            r#"
            [aladin]
            enabled = false
            endpoint = "https://aladin.example/ttb/api/ItemSearch.aspx"
            api_key = "from-file"
            cover_size = "MidBig"
            timeout_secs = 10
            "#,
        )?;
        jail.set_env("SHELF_ALADIN__API_KEY", "from-env");
        jail.set_env("SHELF_ALADIN__MAX_RESULTS", "10");

        let config = Config::load("shelf.toml").map_err(|e| e.to_string())?;
        assert!(!config.aladin.enabled);
        assert_eq!(
            config.aladin.endpoint,
            "https://aladin.example/ttb/api/ItemSearch.aspx"
        );
        assert_eq!(config.aladin.api_key, "from-env");
        assert_eq!(config.aladin.max_results, 10);
        assert_eq!(config.aladin.cover_size, CoverSize::MidBig);
        assert_eq!(config.aladin.timeout().map(|t| t.as_secs()), Some(10));
        Ok(())
    });
}

#[test]
fn config_rejects_unknown_and_invalid_values() {
    Jail::expect_with(|jail| {
        jail.create_file("typo.toml", "[aladin]\napi_kee = \"x\"\n")?;
        assert!(Config::load("typo.toml").is_err());

        jail.create_file("range.toml", "[aladin]\nmax_results = 500\n")?;
        assert!(Config::load("range.toml").is_err());

        jail.create_file("cover.toml", "[aladin]\ncover_size = \"Huge\"\n")?;
        assert!(Config::load("cover.toml").is_err());
        Ok(())
    });
}
