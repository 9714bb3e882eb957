//! Command dispatch: the glue between parsed arguments, the session, and
//! the views.

use crate::cli::Command;
use crate::config::CliConfig;
use crate::views::confirm::DELETE_PROMPT;
use crate::views::{
    edit_request, render_collection, render_navbar, render_task, Confirm, TaskDraft,
};
use anyhow::{anyhow, bail};
use std::io::Write;
use std::sync::Arc;
use taskdeck_client::{ClientConfig, ClientError, TaskdeckClient};
use taskdeck_session::{FileTokenStore, Session, SessionError, TaskCollection, TokenStore};
use tracing::debug;

const NOT_LOGGED_IN: &str = "Not logged in. Run `taskdeck login <email>` first.";

/// One CLI invocation's worth of state.
pub struct App {
    session: Arc<Session>,
    tasks: TaskCollection,
}

impl App {
    /// Connect using the file-backed token store from `config`.
    pub async fn connect(config: &CliConfig) -> anyhow::Result<Self> {
        debug!(
            url = %config.api_base_url,
            store = %config.store_path.display(),
            "Connecting"
        );
        let store: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(&config.store_path));
        Self::with_store(ClientConfig::new(&config.api_base_url), store).await
    }

    pub async fn with_store(
        client_config: ClientConfig,
        store: Arc<dyn TokenStore>,
    ) -> anyhow::Result<Self> {
        let client = TaskdeckClient::new(client_config)?;
        let session = Arc::new(Session::restore(client, store).await?);
        let tasks = TaskCollection::new(Arc::clone(&session));
        Ok(Self { session, tasks })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn tasks(&self) -> &TaskCollection {
        &self.tasks
    }

    /// Run one command, writing its view to `out`.
    pub async fn run<W: Write>(
        &mut self,
        command: Command,
        out: &mut W,
        confirm: &mut dyn Confirm,
    ) -> anyhow::Result<()> {
        match command {
            Command::Register { email, password } => {
                self.session
                    .register(&email, &password)
                    .await
                    .map_err(surface_session)?;
                writeln!(out, "{}", render_navbar(self.session.user().as_ref()))?;
            }
            Command::Login { email, password } => {
                self.session
                    .login(&email, &password)
                    .await
                    .map_err(surface_session)?;
                writeln!(out, "{}", render_navbar(self.session.user().as_ref()))?;
            }
            Command::Logout => {
                self.session.logout().await.map_err(surface_session)?;
                writeln!(out, "{}", render_navbar(None))?;
            }
            Command::Whoami => {
                writeln!(out, "{}", render_navbar(self.session.user().as_ref()))?;
            }
            Command::Status => {
                let client = self.session.client();
                let health = client.health().await.map_err(surface)?;
                writeln!(out, "{}: {}", client.base_url(), health.status)?;
            }
            Command::List => {
                // The list view shows a fetch error itself
                self.require_login()?;
                self.tasks.sync_with_session().await;
                self.render_list(out)?;
                if let Some(error) = self.tasks.error() {
                    bail!("{}", error);
                }
            }
            Command::Show { id } => {
                self.require_login()?;
                let task = self.session.client().get_task(id).await.map_err(surface)?;
                write!(out, "{}", render_task(&task))?;
            }
            Command::Add { title, description } => {
                let request = TaskDraft::new(title, description)
                    .submit()
                    .map_err(surface)?;
                self.load().await?;
                let task = self.tasks.create(request).await.map_err(surface)?;
                writeln!(out, "Created task #{}", task.id)?;
                self.render_list(out)?;
            }
            Command::Edit {
                id,
                title,
                description,
                completed,
            } => {
                let request = edit_request(title.as_deref(), description.as_deref(), completed)
                    .map_err(surface)?;
                self.require_login()?;
                let task = self.tasks.update(id, request).await.map_err(surface)?;
                write!(out, "{}", render_task(&task))?;
            }
            Command::Toggle { id } => {
                self.load().await?;
                self.tasks.toggle(id).await.map_err(surface)?;
                self.render_list(out)?;
            }
            Command::Delete { id, yes } => {
                self.require_login()?;
                if !yes && !confirm.confirm(DELETE_PROMPT)? {
                    writeln!(out, "Cancelled")?;
                    return Ok(());
                }
                self.load().await?;
                self.tasks.delete(id).await.map_err(surface)?;
                writeln!(out, "Deleted task #{}", id)?;
                self.render_list(out)?;
            }
        }

        Ok(())
    }

    fn require_login(&self) -> anyhow::Result<()> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            bail!(NOT_LOGGED_IN)
        }
    }

    /// Bring the list up to date, failing if the fetch did.
    async fn load(&mut self) -> anyhow::Result<()> {
        self.require_login()?;
        self.tasks.sync_with_session().await;
        if let Some(error) = self.tasks.error() {
            bail!("{}", error);
        }
        Ok(())
    }

    fn render_list<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "{}", render_navbar(self.session.user().as_ref()))?;
        write!(out, "{}", render_collection(&self.tasks))?;
        Ok(())
    }
}

// Errors reach the terminal as their display text only
fn surface(error: ClientError) -> anyhow::Error {
    anyhow!(error.display_message())
}

fn surface_session(error: SessionError) -> anyhow::Error {
    anyhow!(error.display_message())
}
