use tokio::sync::mpsc;
use tracing::debug;

use paisa::client::ApiClient;
use paisa::config::fetch_config;
use paisa::models::transaction::{NewTransaction, TransactionFilter, TransactionType};
use paisa::models::user::KycRequest;
use paisa::models::User;
use paisa::search::{Debouncer, SEARCH_DEBOUNCE};
use paisa::services;
use paisa::session::SessionStore;
use paisa::tui::app::{App, CONTACT_LIMIT};
use paisa::tui::event::{Action, CompletedTransfer, Message, spawn_event_reader, spawn_tick_timer};
use paisa::tui::{render, restore_terminal, setup_terminal};
use paisa::{PaisaError, Result};

#[tokio::main]
async fn main() -> std::result::Result<(), PaisaError> {
    // Log to stderr; the TUI owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let app_config = fetch_config()?;

    let mut client = ApiClient::new(&app_config.gateway.base_url)?;
    let session = SessionStore::restore();
    if let Some(token) = session.token() {
        client.set_token(token);
    }

    let mut app = App::new(session);
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();
    let mut debouncer = Debouncer::new();

    // Non-interactive login from the environment, if configured.
    if !app.session.is_authenticated()
        && let (Some(email), Some(password)) = (
            app_config.gateway.email.clone(),
            app_config.gateway.password.clone(),
        )
    {
        app.login.submitting = true;
        dispatch(Action::Login { email, password }, &client, &app, &tx, &mut debouncer);
    }

    // A restored session starts with a full refresh.
    if app.session.is_authenticated() {
        dispatch(Action::RefreshAll, &client, &app, &tx, &mut debouncer);
    }

    let mut terminal = setup_terminal()?;
    spawn_event_reader(tx.clone());
    spawn_tick_timer(tx.clone(), 250);

    let run_result = run(&mut terminal, &mut app, &mut client, &tx, &mut rx, &mut debouncer).await;

    restore_terminal(&mut terminal)?;
    run_result
}

/// Main event loop: draw, receive one message, update, dispatch.
async fn run(
    terminal: &mut paisa::tui::Tui,
    app: &mut App,
    client: &mut ApiClient,
    tx: &mpsc::UnboundedSender<Message>,
    rx: &mut mpsc::UnboundedReceiver<Message>,
    debouncer: &mut Debouncer,
) -> std::result::Result<(), PaisaError> {
    loop {
        terminal
            .draw(|frame| render(frame, app))
            .map_err(|e| PaisaError::Io(e.to_string()))?;

        let Some(message) = rx.recv().await else {
            return Ok(());
        };

        let action = paisa::tui::event::update(app, message);

        // The session can change on login, logout, or 401; keep the
        // client's bearer token in step.
        match app.session.token() {
            Some(token) => client.set_token(token),
            None => client.clear_token(),
        }

        if let Some(action) = action {
            dispatch(action, client, app, tx, debouncer);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Executes an action by spawning the relevant service calls. Each call
/// posts its result back as a [`Message`]; fetches are independent and
/// unordered.
fn dispatch(
    action: Action,
    client: &ApiClient,
    app: &App,
    tx: &mpsc::UnboundedSender<Message>,
    debouncer: &mut Debouncer,
) {
    match action {
        Action::Login { email, password } => {
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                match services::auth::login(&client, &email, &password).await {
                    Ok(response) => {
                        let _ = tx.send(Message::LoggedIn(Box::new(response)));
                    }
                    Err(e) => {
                        let _ = tx.send(Message::LoginFailed(e.to_string()));
                    }
                }
            });
        }

        Action::Logout => {
            debouncer.cancel();
            debug!("signed out");
        }

        Action::RefreshAll => {
            refresh_dashboard(client, app, tx);
            refresh_history(client, app, tx, TransactionFilter::default());
            refresh_analytics(client, app, tx);
            if app.session.current_user().is_some_and(User::is_admin) {
                refresh_admin(client, tx);
            }
        }
        Action::RefreshDashboard => refresh_dashboard(client, app, tx),
        Action::RefreshHistory(filter) => refresh_history(client, app, tx, filter),
        Action::RefreshAnalytics => refresh_analytics(client, app, tx),
        Action::RefreshAdmin => refresh_admin(client, tx),

        Action::Search(query) => {
            let client = client.clone();
            let tx = tx.clone();
            debouncer.trigger(SEARCH_DEBOUNCE, async move {
                let outcome = services::user::search_by_email(&client, &query).await;
                let _ = tx.send(Message::SearchResults { query, outcome });
            });
        }
        Action::CancelSearch => debouncer.cancel(),

        Action::SubmitTransfer {
            recipient,
            amount,
            note,
        } => {
            let Some(from_wallet) = app.session.wallet_id().map(str::to_string) else {
                let _ = tx.send(Message::TransferDone(Err(no_wallet())));
                return;
            };
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = submit_transfer(&client, &from_wallet, &recipient, amount, note).await;
                let _ = tx.send(Message::TransferDone(outcome));
            });
        }

        Action::SubmitKyc { pan, aadhaar } => {
            let Some(user_id) = app.session.current_user().map(|u| u.id.clone()) else {
                return;
            };
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let request = KycRequest {
                    pan_number: pan,
                    aadhaar_number: aadhaar,
                };
                let outcome = services::user::submit_kyc(&client, &user_id, &request).await;
                let _ = tx.send(Message::KycDone(outcome));
            });
        }

        Action::ApproveKyc(id) => admin_action(client, tx, "KYC approval", move |c| async move {
            services::admin::approve_kyc(&c, &id).await
        }),
        Action::RejectKyc(id) => admin_action(client, tx, "KYC rejection", move |c| async move {
            services::admin::reject_kyc(&c, &id).await
        }),
        Action::DeleteUser(id) => admin_action(client, tx, "User deletion", move |c| async move {
            services::admin::delete_user(&c, &id).await
        }),
    }
}

/// Balance, recent transactions, and frequent contacts, fetched
/// concurrently.
fn refresh_dashboard(client: &ApiClient, app: &App, tx: &mpsc::UnboundedSender<Message>) {
    let Some(user) = app.session.current_user() else {
        return;
    };
    let user_id = user.id.clone();
    let wallet_id = app.session.wallet_id().map(str::to_string);

    {
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome = services::wallet::balance(&client, &user_id).await;
            let _ = tx.send(Message::Balance(outcome));
        });
    }

    let Some(wallet_id) = wallet_id else {
        let _ = tx.send(Message::Recent(Err(no_wallet())));
        let _ = tx.send(Message::Contacts(Err(no_wallet())));
        return;
    };

    {
        let client = client.clone();
        let tx = tx.clone();
        let wallet_id = wallet_id.clone();
        tokio::spawn(async move {
            let outcome =
                services::transaction::for_wallet(&client, &wallet_id, &TransactionFilter::default())
                    .await;
            let _ = tx.send(Message::Recent(outcome));
        });
    }

    {
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome =
                services::transaction::frequent_contacts(&client, &wallet_id, CONTACT_LIMIT).await;
            let _ = tx.send(Message::Contacts(outcome));
        });
    }
}

fn refresh_history(
    client: &ApiClient,
    app: &App,
    tx: &mpsc::UnboundedSender<Message>,
    filter: TransactionFilter,
) {
    let Some(wallet_id) = app.session.wallet_id().map(str::to_string) else {
        let _ = tx.send(Message::Transactions(Err(no_wallet())));
        return;
    };
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = services::transaction::for_wallet(&client, &wallet_id, &filter).await;
        let _ = tx.send(Message::Transactions(outcome));
    });
}

fn refresh_analytics(client: &ApiClient, app: &App, tx: &mpsc::UnboundedSender<Message>) {
    let Some(wallet_id) = app.session.wallet_id().map(str::to_string) else {
        let _ = tx.send(Message::Analytics(Err(no_wallet())));
        return;
    };
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = services::transaction::analytics(&client, &wallet_id).await;
        let _ = tx.send(Message::Analytics(outcome));
    });
}

fn refresh_admin(client: &ApiClient, tx: &mpsc::UnboundedSender<Message>) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = services::admin::users(&client).await;
        let _ = tx.send(Message::AdminUsers(outcome));
    });
}

/// Spawns one admin mutation and reports completion.
fn admin_action<F, Fut>(
    client: &ApiClient,
    tx: &mpsc::UnboundedSender<Message>,
    action: &'static str,
    call: F,
) where
    F: FnOnce(ApiClient) -> Fut + Send + 'static,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = call(client).await;
        let _ = tx.send(Message::AdminActionDone { action, outcome });
    });
}

/// Resolves the recipient's wallet and posts the transfer.
async fn submit_transfer(
    client: &ApiClient,
    from_wallet: &str,
    recipient: &User,
    amount: rust_decimal::Decimal,
    note: Option<String>,
) -> Result<CompletedTransfer> {
    let to_wallet = match &recipient.wallet_id {
        Some(id) => id.clone(),
        None => services::wallet::wallet_for_user(client, &recipient.id).await?.id,
    };

    let request = NewTransaction {
        from_wallet_id: Some(from_wallet.to_string()),
        to_wallet_id: to_wallet.clone(),
        amount,
        category: Some("Transfer".to_string()),
        description: note,
        tpe: TransactionType::Transfer,
    };
    let transaction = services::transaction::create(client, &request).await?;

    Ok(CompletedTransfer {
        transaction,
        recipient_wallet_id: to_wallet,
        recipient_name: recipient.name.clone(),
    })
}

fn no_wallet() -> PaisaError {
    PaisaError::Validation("No wallet is associated with this account.".to_string())
}
