use std::io::Write;

use crate::client::{login_url, logout_url, me_url};
use crate::profile::{IdentityRow, UserProfile, GOOGLE_PROVIDER_ID};
use crate::view::{AccountView, ViewState};
use crate::Result;

const NOT_LOGGED_IN: &str = "Not logged in.";
const INDENT: &str = "  ";
const COLUMN_GAP: usize = 2;
const NO_EMAIL: &str = "-";

impl<A, N> AccountView<A, N> {
    /// Write the current state as text.
    /// An authenticated profile with an identity lacking its id token renders nothing and fails.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        match &self.state {
            ViewState::Loading => writeln!(out, "Loading...")?,
            ViewState::Anonymous => {
                writeln!(out, "{}", NOT_LOGGED_IN)?;
                writeln!(out)?;
                let login = format!("login with {}", GOOGLE_PROVIDER_ID);
                actions(
                    out,
                    &[(login.as_str(), login_url(&self.base_url, GOOGLE_PROVIDER_ID)?.to_string())],
                )?;
            }
            ViewState::Authenticated(profile) => self.render_profile(out, profile)?,
        }
        Ok(())
    }

    /// Write the profile response body as pretty printed json. Writes nothing unless authenticated.
    pub fn render_raw<W: Write>(&self, out: &mut W) -> Result<()> {
        if let Some(profile) = self.state.profile() {
            serde_json::to_writer_pretty(&mut *out, profile.raw())?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn render_profile<W: Write>(&self, out: &mut W, profile: &UserProfile) -> Result<()> {
        let rows = profile.identity_rows()?;

        writeln!(out, "User Info")?;
        writeln!(out, "{}email  {}", INDENT, profile.email)?;
        writeln!(out)?;

        writeln!(out, "Linked identities")?;
        if rows.is_empty() {
            writeln!(out, "{}(none)", INDENT)?;
        } else {
            identities(out, &rows)?;
        }
        writeln!(out)?;

        let link = format!("link {}", GOOGLE_PROVIDER_ID);
        let mut items = Vec::with_capacity(3);
        if !profile.google_linked() {
            items.push((
                link.as_str(),
                login_url(&self.base_url, GOOGLE_PROVIDER_ID)?.to_string(),
            ));
        }
        items.push(("logout", logout_url(&self.base_url)?.to_string()));
        items.push(("delete", format!("DELETE {}", me_url(&self.base_url)?)));

        actions(out, &items)
    }
}

fn identities<W: Write>(out: &mut W, rows: &[IdentityRow]) -> Result<()> {
    const HEADER: [&str; 3] = ["PROVIDER", "EXTERNAL ID", "EMAIL"];

    let cells = rows.iter().map(|row| {
        [
            row.identity_provider_id.as_str(),
            row.external_id.as_str(),
            row.email.as_deref().unwrap_or(NO_EMAIL),
        ]
    });

    let mut widths = HEADER.map(width);
    for row in cells.clone() {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(width(cell));
        }
    }

    for row in std::iter::once(HEADER).chain(cells) {
        write!(out, "{}", INDENT)?;
        write!(out, "{:<w0$}", row[0], w0 = widths[0] + COLUMN_GAP)?;
        write!(out, "{:<w1$}", row[1], w1 = widths[1] + COLUMN_GAP)?;
        writeln!(out, "{}", row[2])?;
    }
    Ok(())
}

fn actions<W: Write>(out: &mut W, items: &[(&str, String)]) -> Result<()> {
    let label_width = items.iter().map(|(label, _)| width(label)).max().unwrap_or(0);

    for (label, target) in items {
        writeln!(
            out,
            "[{:<w$}] {}",
            label,
            target,
            w = label_width
        )?;
    }
    Ok(())
}

fn width(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use url::Url;

    use super::*;
    use crate::client::Api;
    use crate::error::ErrorKind;
    use crate::navigator::TerminalNavigator;

    struct Fixed(Option<UserProfile>);

    #[async_trait]
    impl Api for Fixed {
        async fn me(&self) -> Result<UserProfile> {
            self.0.clone().ok_or_else(|| ErrorKind::Unauthenticated.into())
        }

        async fn delete_me(&self) -> Result<()> {
            Ok(())
        }
    }

    fn loaded(profile: Option<serde_json::Value>) -> AccountView<Fixed, TerminalNavigator<Vec<u8>>> {
        let profile = profile.map(|json| serde_json::from_value(json).unwrap());
        let mut view = AccountView::new(
            Fixed(profile),
            TerminalNavigator::new(Vec::new()),
            Url::parse("http://localhost:8080").unwrap(),
        );
        let _ = tokio_test::block_on(view.load_profile());
        view
    }

    fn rendered<A, N>(view: &AccountView<A, N>) -> String {
        let mut buf = Vec::new();
        view.render(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn loading() {
        let view = AccountView::new(
            Fixed(None),
            TerminalNavigator::new(Vec::new()),
            Url::parse("http://localhost:8080").unwrap(),
        );

        assert_eq!(rendered(&view), "Loading...\n");
    }

    #[test]
    fn anonymous() {
        let view = loaded(None);

        assert_eq!(
            rendered(&view),
            "Not logged in.\n\n[login with google] http://localhost:8080/login/google\n"
        );

        let mut raw = Vec::new();
        view.render_raw(&mut raw).unwrap();
        assert!(raw.is_empty());
    }

    #[test]
    fn authenticated_google_linked() {
        let view = loaded(Some(serde_json::json!({
            "email": "a@b.com",
            "identities": [
                {
                    "identityProviderId": "google",
                    "externalId": "123",
                    "mostRecentIdToken": { "email": "a@b.com" }
                },
                {
                    "identityProviderId": "github",
                    "externalId": "98765",
                    "mostRecentIdToken": { "email": "a@github.example" }
                }
            ]
        })));

        let want = "\
User Info
  email  a@b.com

Linked identities
  PROVIDER  EXTERNAL ID  EMAIL
  google    123          a@b.com
  github    98765        a@github.example

[logout] http://localhost:8080/logout
[delete] DELETE http://localhost:8080/private/api/me
";
        assert_eq!(rendered(&view), want);
    }

    #[test]
    fn authenticated_without_google_offers_link() {
        let view = loaded(Some(serde_json::json!({
            "email": "a@b.com",
            "identities": []
        })));

        let got = rendered(&view);

        assert!(got.contains("Linked identities\n  (none)\n"));
        assert!(got.contains("[link google] http://localhost:8080/login/google\n"));
        assert!(got.contains("[logout     ] http://localhost:8080/logout\n"));
        assert!(!got.contains(NOT_LOGGED_IN));
    }

    #[test]
    fn identity_token_without_email() {
        let view = loaded(Some(serde_json::json!({
            "email": "a@b.com",
            "identities": [
                {
                    "identityProviderId": "google",
                    "externalId": "1",
                    "mostRecentIdToken": { "sub": "1", "iss": "x" }
                },
                {
                    "identityProviderId": "github",
                    "externalId": "9",
                    "mostRecentIdToken": { "email": ["a@b.com"] }
                }
            ]
        })));

        let got = rendered(&view);

        assert!(got.contains("  PROVIDER  EXTERNAL ID  EMAIL\n"));
        assert!(got.contains("  google    1            -\n"));
        assert!(got.contains("  github    9            -\n"));
    }

    #[test]
    fn identity_without_token_fails() {
        let view = loaded(Some(serde_json::json!({
            "email": "a@b.com",
            "identities": [{ "identityProviderId": "google", "externalId": "123" }]
        })));

        let mut buf = Vec::new();
        let err = view.render(&mut buf).unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::MissingIdToken { .. }));
        assert!(buf.is_empty());
    }

    #[test]
    fn raw() {
        let body = serde_json::json!({
            "id": "u1",
            "email": "a@b.com",
            "plan": "free",
            "identities": [{
                "identityProviderId": "github",
                "externalId": "9",
                "mostRecentIdToken": null,
                "linkedAt": "2024-01-01T00:00:00Z"
            }]
        });
        let view = loaded(Some(body.clone()));

        let mut buf = Vec::new();
        view.render_raw(&mut buf).unwrap();

        let got: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(got, body);
    }
}
