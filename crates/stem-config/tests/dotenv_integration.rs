//! `.env` loading writes straight into the process environment, so this
//! lives in its own test binary to keep it away from the other Jail tests.

use figment::Jail;
use stem_config::StemConfig;

#[test]
fn dotenv_file_feeds_environment_layer() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "STEMGEN_PACKAGES=[pkg.FromDotenv]\n")?;
        jail.create_file("stemgen.toml", r#"packages = ["pkg.FromFile"]"#)?;

        let config = StemConfig::load_with_dotenv(jail.directory()).expect("config loads");
        assert_eq!(config.packages, vec!["pkg.FromDotenv"]);
        Ok(())
    });
}
