//! Tests for resolved configuration.
//!
//! `Cli` values are built directly rather than parsed, so the environment of
//! the machine running the tests cannot leak into the assertions.

use std::io::Write;

use tempfile::NamedTempFile;

use super::ConfigError;
use super::cli::Cli;
use super::env_file::EnvFile;
use super::validated::{PluginConfig, parse_bool, parse_int};

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

mod defaults {
    use super::*;

    #[test]
    fn unset_values_use_builtin_defaults() {
        let config = PluginConfig::from_raw(&Cli::default(), None).unwrap();

        assert_eq!(config.build.git_ref, "refs/heads/master");
        assert_eq!(config.build.branch, "master");
        assert_eq!(config.build.event, "push");
        assert_eq!(config.build.status, "success");
    }

    #[test]
    fn unset_values_are_empty_zero_or_false() {
        let config = PluginConfig::from_raw(&Cli::default(), None).unwrap();

        assert_eq!(config.delivery.webhook, "");
        assert_eq!(config.delivery.token, "");
        assert!(!config.delivery.skip_verify);
        assert_eq!(config.repo.owner, "");
        assert!(!config.repo.private);
        assert_eq!(config.build.number, 0);
        assert_eq!(config.build.created, 0);
        assert_eq!(config.job.exit_code, 0);
        assert!(!config.dry_run);
        assert!(!config.verbose);
    }

    #[test]
    fn explicit_values_replace_defaults() {
        let cli = Cli {
            commit_ref: some("refs/tags/v1.0.0"),
            build_event: some("tag"),
            build_status: some("failure"),
            ..Cli::default()
        };

        let config = PluginConfig::from_raw(&cli, None).unwrap();

        assert_eq!(config.build.git_ref, "refs/tags/v1.0.0");
        assert_eq!(config.build.event, "tag");
        assert_eq!(config.build.status, "failure");
    }

    #[test]
    fn empty_values_count_as_unset() {
        let cli = Cli {
            commit_ref: some(""),
            build_event: some(""),
            repo_private: some(""),
            skip_verify: some(""),
            build_number: some(""),
            ..Cli::default()
        };

        let config = PluginConfig::from_raw(&cli, None).unwrap();

        assert_eq!(config.build.git_ref, "refs/heads/master");
        assert_eq!(config.build.event, "push");
        assert!(!config.repo.private);
        assert!(!config.delivery.skip_verify);
        assert_eq!(config.build.number, 0);
    }

    #[test]
    fn empty_env_file_value_keeps_default() {
        let env = EnvFile::from_pairs([("DRONE_COMMIT_BRANCH", ""), ("DRONE_REPO_TRUSTED", "")]);

        let config = PluginConfig::from_raw(&Cli::default(), Some(&env)).unwrap();

        assert_eq!(config.build.branch, "master");
        assert!(!config.repo.trusted);
    }
}

mod field_mapping {
    use super::*;

    #[test]
    fn repo_fields() {
        let cli = Cli {
            repo_owner: some("octocat"),
            repo_name: some("hello-world"),
            repo_scm: some("git"),
            repo_link: some("https://git.example.com/octocat/hello-world"),
            repo_avatar: some("https://git.example.com/octocat.png"),
            repo_branch: some("main"),
            repo_private: some("true"),
            repo_trusted: some("0"),
            ..Cli::default()
        };

        let repo = PluginConfig::from_raw(&cli, None).unwrap().repo;

        assert_eq!(repo.owner, "octocat");
        assert_eq!(repo.name, "hello-world");
        assert_eq!(repo.scm, "git");
        assert_eq!(repo.link, "https://git.example.com/octocat/hello-world");
        assert_eq!(repo.avatar, "https://git.example.com/octocat.png");
        assert_eq!(repo.branch, "main");
        assert!(repo.private);
        assert!(!repo.trusted);
    }

    #[test]
    fn commit_fields_land_in_build() {
        let cli = Cli {
            commit_sha: some("d3adb33f"),
            commit_branch: some("feature"),
            commit_url: some("https://git.example.com/octocat/hello-world.git"),
            commit_link: some("https://git.example.com/octocat/hello-world/commit/d3adb33f"),
            commit_message: some("add feature"),
            commit_author: some("Jane"),
            commit_author_email: some("jane@example.com"),
            commit_author_avatar: some("https://example.com/jane.png"),
            ..Cli::default()
        };

        let build = PluginConfig::from_raw(&cli, None).unwrap().build;

        assert_eq!(build.commit, "d3adb33f");
        assert_eq!(build.branch, "feature");
        assert_eq!(build.commit_url, "https://git.example.com/octocat/hello-world.git");
        assert_eq!(
            build.commit_link,
            "https://git.example.com/octocat/hello-world/commit/d3adb33f"
        );
        assert_eq!(build.message, "add feature");
        assert_eq!(build.author, "Jane");
        assert_eq!(build.author_email, "jane@example.com");
        assert_eq!(build.author_avatar, "https://example.com/jane.png");
    }

    #[test]
    fn build_fields() {
        let cli = Cli {
            build_tag: some("v1.2.3"),
            build_number: some("42"),
            build_link: some("https://ci.example.com/octocat/hello-world/42"),
            build_deploy: some("production"),
            build_created: some("1700000000"),
            build_started: some("1700000005"),
            build_finished: some("1700000100"),
            ..Cli::default()
        };

        let build = PluginConfig::from_raw(&cli, None).unwrap().build;

        assert_eq!(build.tag, "v1.2.3");
        assert_eq!(build.number, 42);
        assert_eq!(build.link, "https://ci.example.com/octocat/hello-world/42");
        assert_eq!(build.deploy, "production");
        assert_eq!(build.created, 1_700_000_000);
        assert_eq!(build.started, 1_700_000_005);
        assert_eq!(build.finished, 1_700_000_100);
    }

    #[test]
    fn job_fields() {
        let cli = Cli {
            job_number: some("3"),
            job_status: some("failure"),
            job_error: some("exit status 1"),
            job_exit_code: some("1"),
            job_started: some("1700000010"),
            job_finished: some("1700000020"),
            ..Cli::default()
        };

        let job = PluginConfig::from_raw(&cli, None).unwrap().job;

        assert_eq!(job.number, 3);
        assert_eq!(job.status, "failure");
        assert_eq!(job.error, "exit status 1");
        assert_eq!(job.exit_code, 1);
        assert_eq!(job.started, 1_700_000_010);
        assert_eq!(job.finished, 1_700_000_020);
    }

    #[test]
    fn delivery_fields() {
        let cli = Cli {
            webhook: some("https://example.com/hook"),
            token: some("secret"),
            skip_verify: some("true"),
            ..Cli::default()
        };

        let delivery = PluginConfig::from_raw(&cli, None).unwrap().delivery;

        assert_eq!(delivery.webhook, "https://example.com/hook");
        assert_eq!(delivery.token, "secret");
        assert!(delivery.skip_verify);
    }

    #[test]
    fn webhook_is_not_validated_at_load_time() {
        let cli = Cli {
            webhook: some("not a url \t"),
            ..Cli::default()
        };

        let config = PluginConfig::from_raw(&cli, None).unwrap();

        assert_eq!(config.delivery.webhook, "not a url \t");
    }
}

mod env_file_overlay {
    use super::*;

    #[test]
    fn env_file_fills_unset_fields() {
        let env = EnvFile::from_pairs([
            ("DRONE_REPO_OWNER", "octocat"),
            ("DRONE_BUILD_NUMBER", "7"),
            ("PLUGIN_SKIP_VERIFY", "t"),
        ]);

        let config = PluginConfig::from_raw(&Cli::default(), Some(&env)).unwrap();

        assert_eq!(config.repo.owner, "octocat");
        assert_eq!(config.build.number, 7);
        assert!(config.delivery.skip_verify);
    }

    #[test]
    fn env_file_does_not_override_set_fields() {
        let cli = Cli {
            repo_owner: some("from-cli"),
            build_number: some("1"),
            ..Cli::default()
        };
        let env = EnvFile::from_pairs([
            ("DRONE_REPO_OWNER", "from-file"),
            ("DRONE_BUILD_NUMBER", "99"),
        ]);

        let config = PluginConfig::from_raw(&cli, Some(&env)).unwrap();

        assert_eq!(config.repo.owner, "from-cli");
        assert_eq!(config.build.number, 1);
    }

    #[test]
    fn env_file_overrides_builtin_defaults() {
        let env = EnvFile::from_pairs([
            ("DRONE_COMMIT_REF", "refs/heads/develop"),
            ("DRONE_BUILD_EVENT", "pull_request"),
        ]);

        let config = PluginConfig::from_raw(&Cli::default(), Some(&env)).unwrap();

        assert_eq!(config.build.git_ref, "refs/heads/develop");
        assert_eq!(config.build.event, "pull_request");
        assert_eq!(config.build.status, "success");
    }

    #[test]
    fn malformed_number_in_env_file_fails() {
        let env = EnvFile::from_pairs([("DRONE_JOB_STARTED", "yesterday")]);

        let result = PluginConfig::from_raw(&Cli::default(), Some(&env));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidNumber {
                field: "DRONE_JOB_STARTED",
                ..
            })
        ));
    }

    #[test]
    fn loaded_file_fills_unset_fields() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "DRONE_REPO_NAME=hello-world").unwrap();
        writeln!(file, "DRONE_BUILD_STATUS=failure").unwrap();
        file.flush().unwrap();

        let env = EnvFile::load(file.path()).unwrap();
        let config = PluginConfig::from_raw(&Cli::default(), Some(&env)).unwrap();

        assert_eq!(config.repo.name, "hello-world");
        assert_eq!(config.build.status, "failure");
    }

    #[test]
    fn verbose_can_come_from_env_file() {
        let env = EnvFile::from_pairs([("PLUGIN_VERBOSE", "true")]);

        let config = PluginConfig::from_raw(&Cli::default(), Some(&env)).unwrap();

        assert!(config.verbose);
    }

    #[test]
    fn empty_cli_value_falls_through_to_env_file() {
        let cli = Cli {
            repo_owner: some(""),
            ..Cli::default()
        };
        let env = EnvFile::from_pairs([("DRONE_REPO_OWNER", "octocat")]);

        let config = PluginConfig::from_raw(&cli, Some(&env)).unwrap();

        assert_eq!(config.repo.owner, "octocat");
    }
}

mod coercion {
    use super::*;

    #[test]
    fn malformed_build_number_fails() {
        let cli = Cli {
            build_number: some("forty-two"),
            ..Cli::default()
        };

        let result = PluginConfig::from_raw(&cli, None);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidNumber {
                field: "DRONE_BUILD_NUMBER",
                ..
            })
        ));
    }

    #[test]
    fn malformed_bool_fails() {
        let cli = Cli {
            skip_verify: some("maybe"),
            ..Cli::default()
        };

        let err = PluginConfig::from_raw(&cli, None).unwrap_err();

        assert_eq!(err.field(), "PLUGIN_SKIP_VERIFY");
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn parse_bool_accepts_all_literals() {
        for value in ["1", "t", "T", "TRUE", "true", "True"] {
            assert!(parse_bool("X", value).unwrap(), "{value}");
        }
        for value in ["0", "f", "F", "FALSE", "false", "False"] {
            assert!(!parse_bool("X", value).unwrap(), "{value}");
        }
    }

    #[test]
    fn parse_bool_rejects_other_values() {
        for value in ["yes", "no", "on", "", "tRuE"] {
            assert!(parse_bool("X", value).is_err(), "{value}");
        }
    }

    #[test]
    fn parse_int_accepts_negative_and_padded() {
        assert_eq!(parse_int("X", "-1").unwrap(), -1);
        assert_eq!(parse_int("X", " 12 ").unwrap(), 12);
    }

    #[test]
    fn parse_int_rejects_float() {
        assert!(parse_int("X", "1.5").is_err());
    }

    #[test]
    fn parse_int_accepts_base_prefixes() {
        assert_eq!(parse_int("X", "0x1F").unwrap(), 31);
        assert_eq!(parse_int("X", "0X1f").unwrap(), 31);
        assert_eq!(parse_int("X", "0b101").unwrap(), 5);
        assert_eq!(parse_int("X", "0o17").unwrap(), 15);
        assert_eq!(parse_int("X", "010").unwrap(), 8);
        assert_eq!(parse_int("X", "-0x10").unwrap(), -16);
        assert_eq!(parse_int("X", "0").unwrap(), 0);
    }

    #[test]
    fn parse_int_accepts_digit_separators() {
        assert_eq!(parse_int("X", "1_000").unwrap(), 1000);
        assert_eq!(parse_int("X", "0x_ff_ff").unwrap(), 0xffff);
    }

    #[test]
    fn parse_int_rejects_malformed_literals() {
        for value in ["1__0", "_1", "1_", "08", "0x", "0x-5", "--1", "0b2"] {
            assert!(parse_int("X", value).is_err(), "{value}");
        }
    }

    #[test]
    fn hex_build_number_loads() {
        let cli = Cli {
            build_number: some("0x1F"),
            build_created: some("1_700_000_000"),
            ..Cli::default()
        };

        let config = PluginConfig::from_raw(&cli, None).unwrap();

        assert_eq!(config.build.number, 31);
        assert_eq!(config.build.created, 1_700_000_000);
    }
}

mod display {
    use super::*;

    #[test]
    fn summary_redacts_token() {
        let cli = Cli {
            webhook: some("https://example.com/hook"),
            token: some("super-secret"),
            repo_owner: some("octocat"),
            repo_name: some("hello-world"),
            build_number: some("5"),
            ..Cli::default()
        };

        let summary = PluginConfig::from_raw(&cli, None).unwrap().to_string();

        assert!(summary.contains("https://example.com/hook"));
        assert!(summary.contains("octocat/hello-world"));
        assert!(summary.contains("#5"));
        assert!(summary.contains("<redacted>"));
        assert!(!summary.contains("super-secret"));
    }

    #[test]
    fn summary_without_token_says_none() {
        let summary = PluginConfig::from_raw(&Cli::default(), None)
            .unwrap()
            .to_string();

        assert!(summary.contains("token: none"));
    }
}
