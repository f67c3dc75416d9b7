use std::io::BufRead;

use clap::Subcommand;
use shuttle_core::model::{RouteDraft, RouteId};

use crate::{
    api::{RouteSource, ShuttleApi},
    config::ClientConfig,
    ops::{auth_ops, booking_ops, route_ops, wallet_ops, OpsError},
    session::{Session, SessionError, SessionStore},
};

use super::{display, ShuttleAppError};

/// passwords are never taken as arguments. `register` and `login` read them from the
/// first line of standard input, e.g. `shuttle login --email a@uni.edu < pw.txt`.
#[derive(Debug, Clone, Subcommand)]
pub enum ShuttleOperation {
    /// create an account with a university email, password read from stdin
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
    },
    /// log in and remember the session for later commands, password read from stdin
    Login {
        #[arg(long)]
        email: String,
    },
    /// forget the stored session
    Logout,
    /// show the logged-in user and wallet balance
    Profile,
    /// list shuttle routes
    Routes {
        /// `all` for every route, `peak` for the peak-hours view
        #[arg(long, value_enum, default_value_t = RouteSource::All)]
        source: RouteSource,
    },
    /// find the routes serving a location, best candidates first
    Search {
        /// text to look for in stop names, e.g. "A Block"
        location: String,
        /// book the match at this position (1 = first) in the result list
        #[arg(long)]
        book: Option<usize>,
    },
    /// add a route (admin only)
    AddRoute {
        #[arg(long)]
        name: String,
        /// comma separated stop names
        #[arg(long)]
        stops: String,
        /// comma separated time windows, e.g. "08:00-10:00, 17:00-19:00"
        #[arg(long)]
        peak_hours: String,
        /// High, Medium or Low
        #[arg(long)]
        demand_level: String,
        #[arg(long)]
        active_shuttles: u32,
    },
    /// delete a route by id (admin only)
    DeleteRoute { id: String },
    /// book a ride on a route by id
    Book { route_id: String },
    /// list your booked rides
    Bookings,
    /// show your wallet balance
    Wallet,
    /// add money to your wallet
    Recharge {
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },
    /// print the effective client configuration as TOML
    Config,
}

impl ShuttleOperation {
    /// runs this operation against `api`, returning the text to show the user.
    /// `input` supplies the password for `register` and `login`.
    pub fn run(
        &self,
        api: &dyn ShuttleApi,
        store: &SessionStore,
        conf: &ClientConfig,
        input: &mut dyn BufRead,
    ) -> Result<String, ShuttleAppError> {
        match self {
            ShuttleOperation::Register { email, name } => {
                let password = read_password(input)?;
                Ok(auth_ops::register(api, email, name, &password)?)
            }
            ShuttleOperation::Login { email } => {
                let password = read_password(input)?;
                let outcome = auth_ops::login(api, store, email, &password)?;
                Ok(format!(
                    "{}\nWelcome, {}! Wallet balance: {}",
                    outcome.message,
                    outcome.session.display_name,
                    display::money(outcome.wallet_balance)
                ))
            }
            ShuttleOperation::Logout => {
                if auth_ops::logout(store)? {
                    Ok(String::from("logged out"))
                } else {
                    Ok(String::from("not logged in"))
                }
            }
            ShuttleOperation::Profile => {
                let session = require_session(store, "view your profile")?;
                let profile = auth_ops::profile(api, &session)?;
                Ok(format!(
                    "{} <{}>\nWallet balance: {}",
                    profile.display_name,
                    profile.email,
                    display::money(profile.wallet_balance)
                ))
            }
            ShuttleOperation::Routes { source } => {
                let routes = route_ops::list_routes(api, *source)?;
                Ok(display::route_list(&routes, "No routes available", false))
            }
            ShuttleOperation::Search { location, book } => {
                let matches = route_ops::search_routes(api, location)?;
                match book {
                    None => Ok(display::route_list(
                        &matches,
                        "No matching routes found",
                        true,
                    )),
                    Some(position) => {
                        let session = require_session(store, "book a ride")?;
                        let route = position
                            .checked_sub(1)
                            .and_then(|idx| matches.get(idx))
                            .ok_or_else(|| {
                                ShuttleAppError::InvalidArgument(format!(
                                    "no match at position {position}, found {} matching routes",
                                    matches.len()
                                ))
                            })?;
                        let response = booking_ops::book_route(api, &session, route)?;
                        Ok(display::confirmation(&response))
                    }
                }
            }
            ShuttleOperation::AddRoute {
                name,
                stops,
                peak_hours,
                demand_level,
                active_shuttles,
            } => {
                let session = require_session(store, "manage routes")?;
                let draft =
                    RouteDraft::from_form(name, stops, peak_hours, demand_level, *active_shuttles)
                        .map_err(OpsError::InvalidRoute)?;
                route_ops::add_route(api, &session, &draft)?;
                Ok(format!("added route '{}'", draft.name))
            }
            ShuttleOperation::DeleteRoute { id } => {
                let session = require_session(store, "manage routes")?;
                let id = RouteId::from(id.as_str());
                route_ops::delete_route(api, &session, &id)?;
                Ok(format!("deleted route {id}"))
            }
            ShuttleOperation::Book { route_id } => {
                let session = require_session(store, "book a ride")?;
                let response =
                    booking_ops::book_ride(api, &session, &RouteId::from(route_id.as_str()))?;
                Ok(display::confirmation(&response))
            }
            ShuttleOperation::Bookings => {
                let session = require_session(store, "see your bookings")?;
                let bookings = booking_ops::list_bookings(api, &session)?;
                Ok(display::booking_list(&bookings))
            }
            ShuttleOperation::Wallet => {
                let session = require_session(store, "see your wallet")?;
                let balance = wallet_ops::wallet_balance(api, &session)?;
                Ok(format!("Wallet balance: {}", display::money(balance)))
            }
            ShuttleOperation::Recharge { amount } => {
                let session = require_session(store, "recharge your wallet")?;
                let balance = wallet_ops::recharge(api, &session, *amount)?;
                Ok(format!(
                    "Wallet recharged successfully! New balance: {}",
                    display::money(balance)
                ))
            }
            ShuttleOperation::Config => Ok(conf.to_toml()?),
        }
    }
}

/// first line of `input` without its line ending. empty input gives an empty
/// password, which the auth operations report as a missing field.
fn read_password(input: &mut dyn BufRead) -> Result<String, ShuttleAppError> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(ShuttleAppError::PasswordReadError)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// the stored session, or a message telling the user to log in before `action`
fn require_session(store: &SessionStore, action: &str) -> Result<Session, ShuttleAppError> {
    store.require().map_err(|e| match e {
        SessionError::NotLoggedIn => ShuttleAppError::LoginRequired(action.to_string()),
        other => ShuttleAppError::SessionError(other),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::api::{
        fake_shuttle_api::{route, FakeShuttleApi},
        Endpoint,
    };
    use crate::app::ShuttleApp;
    use clap::Parser;

    struct Harness {
        _dir: tempfile::TempDir,
        store: SessionStore,
        conf: ClientConfig,
        api: FakeShuttleApi,
    }

    impl Harness {
        fn new(api: FakeShuttleApi) -> Harness {
            let dir = tempfile::tempdir().unwrap();
            let store = SessionStore::new(dir.path().join("session.json"));
            Harness {
                _dir: dir,
                store,
                conf: ClientConfig::default(),
                api,
            }
        }

        fn run(&self, args: &[&str]) -> Result<String, ShuttleAppError> {
            self.run_with_input(args, "")
        }

        fn run_with_input(&self, args: &[&str], input: &str) -> Result<String, ShuttleAppError> {
            let mut argv = vec!["shuttle"];
            argv.extend_from_slice(args);
            let app = ShuttleApp::try_parse_from(argv).unwrap();
            let mut input = input.as_bytes();
            app.op.run(&self.api, &self.store, &self.conf, &mut input)
        }
    }

    fn campus() -> FakeShuttleApi {
        FakeShuttleApi::with_routes(vec![
            route("A", &["Gate1", "Lib"], "Low", 2),
            route("B", &["Gate1"], "High", 1),
        ])
        .with_account("a@uni.edu", "Asha", "pw", 100.0)
        .with_account("root@uni.edu", "admin", "pw", 0.0)
    }

    #[test]
    fn test_login_search_book_flow() {
        let h = Harness::new(campus());
        let out = h
            .run_with_input(&["login", "--email", "a@uni.edu"], "pw\n")
            .unwrap();
        assert!(out.contains("Welcome, Asha! Wallet balance: ₹100.00"));

        let out = h.run(&["search", "gate1"]).unwrap();
        assert!(out.starts_with("1. Route B [B]"));
        assert!(out.contains("2. Route A [A]"));

        let out = h.run(&["search", "gate1", "--book", "1"]).unwrap();
        assert!(out.contains("Wallet balance: ₹75.00"));

        let out = h.run(&["bookings"]).unwrap();
        assert!(out.starts_with("Route B"));
        assert!(out.contains("Fare: ₹25.00"));
    }

    #[test]
    fn test_password_is_not_an_argument() {
        assert!(ShuttleApp::try_parse_from([
            "shuttle", "login", "--email", "a@uni.edu", "--password", "pw"
        ])
        .is_err());
        assert!(ShuttleApp::try_parse_from([
            "shuttle", "register", "--email", "a@uni.edu", "--name", "Asha", "--password", "pw"
        ])
        .is_err());
    }

    #[test]
    fn test_register_reads_password_from_input() {
        let h = Harness::new(FakeShuttleApi::default());
        let out = h
            .run_with_input(&["register", "--email", "n@uni.edu", "--name", "Nia"], "secret\nignored\n")
            .unwrap();
        assert_eq!(out, "User registered successfully");
        let out = h
            .run_with_input(&["login", "--email", "n@uni.edu"], "secret")
            .unwrap();
        assert!(out.contains("Welcome, Nia!"));
    }

    #[test]
    fn test_login_without_password_input_is_refused_locally() {
        let h = Harness::new(campus());
        let error = h.run(&["login", "--email", "a@uni.edu"]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "please fill in all required fields, missing: password"
        );
        assert!(h.api.calls().is_empty());
        assert!(h.store.load().unwrap().is_none());
    }

    #[test]
    fn test_booking_requires_login() {
        let h = Harness::new(campus());
        let error = h.run(&["book", "A"]).unwrap_err();
        assert_eq!(error.to_string(), "please log in to book a ride");
        assert!(h.api.calls().is_empty());
    }

    #[test]
    fn test_search_book_position_out_of_range() {
        let h = Harness::new(campus());
        h.store.save(&Session::new("a@uni.edu", "Asha")).unwrap();
        let error = h.run(&["search", "lib", "--book", "2"]).unwrap_err();
        assert!(matches!(error, ShuttleAppError::InvalidArgument(_)));
        let error = h.run(&["search", "lib", "--book", "0"]).unwrap_err();
        assert!(matches!(error, ShuttleAppError::InvalidArgument(_)));
        assert!(!h.api.calls().contains(&Endpoint::BookRide));
    }

    #[test]
    fn test_empty_search_result() {
        let h = Harness::new(campus());
        assert_eq!(
            h.run(&["search", "stadium"]).unwrap(),
            "No matching routes found"
        );
    }

    #[test]
    fn test_admin_route_management() {
        let h = Harness::new(campus());
        h.run_with_input(&["login", "--email", "root@uni.edu"], "pw\r\n")
            .unwrap();
        let out = h
            .run(&[
                "add-route",
                "--name",
                "Loop",
                "--stops",
                "Hostel, Gym",
                "--peak-hours",
                "17:00-19:00",
                "--demand-level",
                "medium",
                "--active-shuttles",
                "2",
            ])
            .unwrap();
        assert_eq!(out, "added route 'Loop'");
        assert_eq!(h.api.routes().len(), 3);

        h.run(&["delete-route", "A"]).unwrap();
        let out = h.run(&["routes"]).unwrap();
        assert!(!out.contains("Route A"));
        assert!(out.contains("Loop"));
    }

    #[test]
    fn test_user_cannot_manage_routes() {
        let h = Harness::new(campus());
        h.store.save(&Session::new("a@uni.edu", "Asha")).unwrap();
        let error = h.run(&["delete-route", "A"]).unwrap_err();
        assert!(matches!(
            error,
            ShuttleAppError::OpsError(OpsError::AdminRequired(_))
        ));
    }

    #[test]
    fn test_wallet_and_recharge() {
        let h = Harness::new(campus());
        h.store.save(&Session::new("a@uni.edu", "Asha")).unwrap();
        assert_eq!(h.run(&["wallet"]).unwrap(), "Wallet balance: ₹100.00");
        assert_eq!(
            h.run(&["recharge", "50"]).unwrap(),
            "Wallet recharged successfully! New balance: ₹150.00"
        );
        let error = h.run(&["recharge", "-5"]).unwrap_err();
        assert!(matches!(
            error,
            ShuttleAppError::OpsError(OpsError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_logout_then_profile() {
        let h = Harness::new(campus());
        h.store.save(&Session::new("a@uni.edu", "Asha")).unwrap();
        assert!(h.run(&["profile"]).unwrap().starts_with("Asha <a@uni.edu>"));
        assert_eq!(h.run(&["logout"]).unwrap(), "logged out");
        assert_eq!(h.run(&["logout"]).unwrap(), "not logged in");
        assert!(matches!(
            h.run(&["profile"]),
            Err(ShuttleAppError::LoginRequired(_))
        ));
    }

    #[test]
    fn test_config_prints_toml() {
        let h = Harness::new(FakeShuttleApi::default());
        let out = h.run(&["config"]).unwrap();
        assert!(out.contains("base_url = \"http://localhost:8000\""));
    }

    #[test]
    fn test_global_config_flag_parses() {
        let app =
            ShuttleApp::try_parse_from(["shuttle", "routes", "--source", "peak", "--config", "c.toml"])
                .unwrap();
        assert_eq!(app.config.as_deref(), Some("c.toml"));
        assert!(matches!(
            app.op,
            ShuttleOperation::Routes {
                source: RouteSource::Peak
            }
        ));
    }
}
