use std::path::PathBuf;

use figment::Jail;
use pretty_assertions::assert_eq;
use stem_config::{ConfigOverrides, StemConfig};

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "stemgen.toml",
            r#"
output_directory = "from-file"
packages = ["pkg.A"]
"#,
        )?;
        jail.set_env("STEMGEN_OUTPUT_DIRECTORY", "from-env");
        jail.set_env("STEMGEN_GENERATION__GENERATE_GETTERS", "false");

        let config = StemConfig::load(jail.directory()).expect("config loads");
        assert_eq!(config.output_directory, PathBuf::from("from-env"));
        assert!(!config.generation.generate_getters);
        assert_eq!(config.packages, vec!["pkg.A"]);
        Ok(())
    });
}

#[test]
fn env_supplies_package_list() {
    Jail::expect_with(|jail| {
        jail.set_env("STEMGEN_PACKAGES", "[pkg.A,pkg.B]");

        let config = StemConfig::load(jail.directory()).expect("config loads");
        assert_eq!(config.packages, vec!["pkg.A", "pkg.B"]);
        Ok(())
    });
}

#[test]
fn command_line_overrides_beat_env() {
    Jail::expect_with(|jail| {
        jail.set_env("STEMGEN_RESOURCES_DIRECTORY", "from-env");
        jail.set_env("STEMGEN_PACKAGES", "[pkg.Env]");

        let overrides = ConfigOverrides {
            resources_directory: Some(PathBuf::from("from-cli")),
            packages: vec!["pkg.Cli".to_string()],
            classpath_entries: vec![PathBuf::from("lib/a.tar")],
            generator_command: vec!["plugin".to_string()],
            ..ConfigOverrides::default()
        };
        let figment = overrides.apply(StemConfig::figment(jail.directory(), None).expect("figment"));
        let config: StemConfig = figment.extract()?;

        assert_eq!(config.resources_directory, PathBuf::from("from-cli"));
        assert_eq!(config.packages, vec!["pkg.Cli"]);
        assert_eq!(config.classpath.entries, vec![PathBuf::from("lib/a.tar")]);
        assert_eq!(config.generator.command, vec!["plugin"]);
        Ok(())
    });
}

#[test]
fn unset_overrides_leave_lower_layers_alone() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "stemgen.toml",
            r#"
packages = ["pkg.A"]

[classpath]
file = "cp.txt"
"#,
        )?;

        let figment = ConfigOverrides::default()
            .apply(StemConfig::figment(jail.directory(), None).expect("figment"));
        let config: StemConfig = figment.extract()?;

        assert_eq!(config.packages, vec!["pkg.A"]);
        assert_eq!(config.classpath.file, Some(PathBuf::from("cp.txt")));
        Ok(())
    });
}
