//! `.env` support. Kept in its own test binary because dotenvy writes to the
//! process environment outside of figment::Jail's bookkeeping.

use epik_config::Settings;
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn dotenv_file_supplies_settings() {
    Jail::expect_with(|jail| {
        jail.create_file(
            ".env",
            "JIRA_PROJECT=OPS\n\
             JIRA_EPIC_KEY=OPS-12\n\
             JIRA_EMAIL=ops@example.com\n\
             JIRA_TOKEN=dotenv-token\n\
             JIRA_HOST=ops.atlassian.net\n\
             JIRA_ID=acc-ops\n",
        )?;

        let settings = Settings::load_with_dotenv().expect("settings load");
        assert_eq!(settings.project(), "OPS");
        assert_eq!(settings.epic_key(), "OPS-12");
        assert_eq!(settings.jira_url(), "https://ops.atlassian.net/");
        assert_eq!(settings.default_assignee(), Some("acc-ops"));
        Ok(())
    });
}
