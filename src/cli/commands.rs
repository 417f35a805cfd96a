//! Command handlers for the MentalMuse CLI.
//!
//! Each handler runs against the local storage file and, for `--remote`
//! feeds and recording analysis, the configured API server. Protected
//! commands go through the navigation gate first, the same way screens do.

use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};

use super::args::{CliCommand, FeedTarget};
use crate::adapters::{FileAudioDevice, FileStore, ReqwestHttpClient};
use crate::client::ApiClient;
use crate::community::{share_text, Board, CommunityStore, RemoteCommunity};
use crate::config::AppConfig;
use crate::error::{AuthError, MuseError, MuseResult};
use crate::journal::{AudioCapture, MoodLog, VentLog};
use crate::models::community::Post;
use crate::models::journal::{MoodEntryKind, VentRecording};
use crate::progression::{xp_for_level, ProgressionStore};
use crate::recommend::{canonical_mood, recommend};
use crate::session::{Gate, OnboardingFlow, OnboardingStep, Route, SessionManager, UserType};
use crate::storage::{keys, RECORDINGS_DIR};
use crate::traits::KeyValueStore;

type Store = Arc<FileStore>;

/// How often the vent level meter redraws.
const METER_REFRESH: StdDuration = StdDuration::from_millis(100);
const METER_WIDTH: usize = 20;

/// Everything a command needs: config, storage and terminal streams.
pub struct CliContext<R: BufRead, W: Write> {
    config: AppConfig,
    store: Store,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> CliContext<R, W> {
    /// Open the storage file in the configured data directory.
    pub fn open(config: AppConfig, input: R, out: W) -> MuseResult<Self> {
        let store = FileStore::open(config.data_dir()?)?;
        Ok(Self::with_store(config, Arc::new(store), input, out))
    }

    pub fn with_store(config: AppConfig, store: Store, input: R, out: W) -> Self {
        Self {
            config,
            store,
            input,
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn session(&self) -> SessionManager<Store> {
        SessionManager::new(Arc::clone(&self.store))
    }

    fn gate(&self) -> Gate {
        Gate::new(Duration::days(self.config.onboarding_expiry_days))
    }

    /// Where the gate sends a request for `route` right now.
    fn resolve(&self, route: Route) -> MuseResult<Route> {
        let flags = self.session().flags()?;
        Ok(self.gate().resolve(&flags, route, Utc::now()))
    }

    /// Fail unless `route` would render as requested.
    fn enter(&self, route: Route) -> MuseResult<()> {
        match self.resolve(route)? {
            resolved if resolved == route => Ok(()),
            Route::Onboarding => Err(AuthError::OnboardingRequired.into()),
            Route::Login => Err(AuthError::NotAuthenticated.into()),
            _ => Ok(()),
        }
    }

    fn api_client(&self) -> MuseResult<ApiClient<ReqwestHttpClient>> {
        let mut client = ApiClient::with_base_url(ReqwestHttpClient::new(), &self.config.api_url);
        client.set_auth_token(self.session().token()?);
        Ok(client)
    }

    fn read_line(&mut self) -> MuseResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Run a command. `Serve`, `Version`, `Help` and `Invalid` are handled
    /// by the dispatcher and do nothing here.
    pub async fn execute(&mut self, command: CliCommand) -> MuseResult<()> {
        match command {
            CliCommand::Status => self.status(),
            CliCommand::Route { route } => self.route(route),
            CliCommand::Onboard { answers } => self.onboard(answers),
            CliCommand::Login { email } => self.login(email).await,
            CliCommand::Register { email, nickname } => self.register(&email, nickname).await,
            CliCommand::Logout => self.logout(),
            CliCommand::Quests => self.quests(),
            CliCommand::Journal { quest_id, text } => self.journal(&quest_id, &text),
            CliCommand::Complete { quest_id, text } => self.complete(&quest_id, text),
            CliCommand::Progress => self.progress(),
            CliCommand::Post {
                target,
                mood,
                message,
            } => self.post(target, mood.as_deref(), &message).await,
            CliCommand::Feed { target } => self.feed(target).await,
            CliCommand::Like { target, post_id } => self.like(target, &post_id).await,
            CliCommand::Comment {
                target,
                post_id,
                text,
            } => self.comment(target, &post_id, &text).await,
            CliCommand::Reply {
                target,
                post_id,
                comment_id,
                text,
            } => self.reply(target, &post_id, &comment_id, &text).await,
            CliCommand::Recommend { mood } => self.recommend(&mood),
            CliCommand::Mood { mood, text } => self.mood(&mood, text).await,
            CliCommand::Moods => self.moods(),
            CliCommand::Vent { file, mood } => self.vent(&file, mood).await,
            CliCommand::Vents => self.vents(),
            CliCommand::VentNotes { id, notes } => self.vent_notes(&id, &notes),
            CliCommand::VentDelete { id } => self.vent_delete(&id),
            CliCommand::Analyze { file } => self.analyze(&file).await,
            CliCommand::Serve | CliCommand::Version | CliCommand::Help | CliCommand::Invalid(_) => {
                Ok(())
            }
        }
    }

    // Session

    fn status(&mut self) -> MuseResult<()> {
        let session = self.session();
        let flags = session.flags()?;
        let destination = self.gate().evaluate(&flags, Utc::now());

        match flags.onboarding_timestamp {
            Some(at) if flags.onboarding_complete => {
                writeln!(self.out, "Onboarding:    complete ({})", at.format("%Y-%m-%d"))?
            }
            _ => writeln!(self.out, "Onboarding:    not complete")?,
        }
        if flags.is_authenticated {
            let kind = match flags.user_type {
                Some(UserType::Email) => "email",
                _ => "anonymous",
            };
            let user = session.user_id()?.unwrap_or_default();
            writeln!(self.out, "Signed in:     {} ({})", user, kind)?;
        } else {
            writeln!(self.out, "Signed in:     no")?;
        }
        writeln!(self.out, "Next screen:   {}", Route::from(destination))?;
        Ok(())
    }

    fn route(&mut self, route: Route) -> MuseResult<()> {
        let resolved = self.resolve(route)?;
        if resolved == route {
            writeln!(self.out, "{} renders", route)?;
        } else {
            writeln!(self.out, "{} redirects to {}", route, resolved)?;
        }
        Ok(())
    }

    fn onboard(&mut self, answers: Vec<String>) -> MuseResult<()> {
        if self.resolve(Route::Onboarding)? != Route::Onboarding {
            writeln!(self.out, "Onboarding is already complete.")?;
            return Ok(());
        }

        let mut flow = OnboardingFlow::new();
        if answers.is_empty() {
            if !self.interactive_onboarding(&mut flow)? {
                writeln!(self.out, "Onboarding cancelled.")?;
                return Ok(());
            }
        } else {
            for answer in &answers {
                flow.answer(answer)?;
            }
        }

        let answers = flow.into_answers().ok_or_else(|| {
            MuseError::validation("answers", "Answer all three questions to finish onboarding")
        })?;
        self.session().complete_onboarding(&answers, Utc::now())?;
        writeln!(self.out, "Onboarding complete. Sign in with `mentalmuse login`.")?;
        Ok(())
    }

    /// Walk the breathing warm-up and questions on the terminal. Returns
    /// false when input ends early.
    fn interactive_onboarding(&mut self, flow: &mut OnboardingFlow) -> MuseResult<bool> {
        writeln!(self.out, "Let's start with a few slow breaths.")?;
        while let OnboardingStep::Breathing { remaining } = flow.step() {
            writeln!(
                self.out,
                "Breathe in... and out. Press Enter ({} left, or type 'skip').",
                remaining
            )?;
            self.out.flush()?;
            match self.read_line()? {
                None => return Ok(false),
                Some(line) if line.eq_ignore_ascii_case("skip") => flow.skip_breathing(),
                Some(_) => {
                    flow.breathe();
                }
            }
        }

        while let Some(question) = flow.current_question() {
            writeln!(self.out, "\n{}", question.text)?;
            for (i, option) in question.options.iter().enumerate() {
                writeln!(self.out, "  {}. {}", i + 1, option)?;
            }
            write!(self.out, "> ")?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            if let Err(err) = flow.answer(&line) {
                writeln!(self.out, "{}", err.user_message())?;
            }
        }
        Ok(true)
    }

    async fn login(&mut self, email: Option<String>) -> MuseResult<()> {
        match self.resolve(Route::Login)? {
            Route::Onboarding => return Err(AuthError::OnboardingRequired.into()),
            Route::Home => {
                writeln!(self.out, "Already signed in. Run `mentalmuse logout` first.")?;
                return Ok(());
            }
            _ => {}
        }

        let session = self.session();
        let client = self.api_client()?;
        let token = match email {
            None => {
                let user_id = session.login_anonymous()?;
                writeln!(self.out, "Signed in anonymously as {}.", user_id)?;
                client.login_anonymous().await.map(|auth| auth.token)
            }
            Some(email) => {
                let password = rpassword::prompt_password("Password: ")?;
                session.login_email(&email, &password)?;
                writeln!(self.out, "Signed in as {}.", email.trim())?;
                client.login(email.trim(), &password).await.map(|auth| auth.token)
            }
        };

        // The server session is optional; local features work without it.
        match token {
            Ok(token) => session.store_token(&token)?,
            Err(err) => tracing::warn!(error = %err, "no server session, continuing offline"),
        }
        Ok(())
    }

    async fn register(&mut self, email: &str, nickname: Option<String>) -> MuseResult<()> {
        self.enter(Route::Register)?;
        let password = rpassword::prompt_password("Password: ")?;
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::EmptyFields.into());
        }

        let auth = self
            .api_client()?
            .register(email.trim(), &password, nickname.as_deref())
            .await?;

        let session = self.session();
        session.login_email(email, &password)?;
        session.store_token(&auth.token)?;
        let name = auth.user.nickname.as_deref().unwrap_or(email.trim());
        writeln!(self.out, "Welcome, {}! Your account is ready.", name)?;
        Ok(())
    }

    fn logout(&mut self) -> MuseResult<()> {
        self.session().logout()?;
        writeln!(self.out, "Signed out.")?;
        Ok(())
    }

    // Quests

    fn quests(&mut self) -> MuseResult<()> {
        self.enter(Route::MindfulQuest)?;
        let progression = ProgressionStore::load(Arc::clone(&self.store))?;
        for view in progression.quests() {
            let quest = view.quest;
            let mark = if view.completed { "x" } else { " " };
            writeln!(
                self.out,
                "[{}] {}. {} ({}, {}, {}) +{} XP",
                mark,
                quest.id,
                quest.title,
                quest.quest_type,
                quest.category,
                quest.difficulty,
                quest.xp_reward
            )?;
            writeln!(self.out, "      {}", quest.description)?;
            if !view.journal_entry.is_empty() {
                writeln!(self.out, "      Draft: {}", view.journal_entry)?;
            }
        }
        Ok(())
    }

    fn journal(&mut self, quest_id: &str, text: &str) -> MuseResult<()> {
        self.enter(Route::MindfulQuest)?;
        let mut progression = ProgressionStore::load(Arc::clone(&self.store))?;
        if progression.set_journal_entry(quest_id, text)? {
            writeln!(self.out, "Draft saved for quest {}.", quest_id)?;
        } else {
            writeln!(self.out, "Quest {} is unknown or already completed.", quest_id)?;
        }
        Ok(())
    }

    fn complete(&mut self, quest_id: &str, text: Option<String>) -> MuseResult<()> {
        self.enter(Route::MindfulQuest)?;
        let mut progression = ProgressionStore::load(Arc::clone(&self.store))?;
        let text = text.unwrap_or_else(|| progression.journal_entry(quest_id).to_string());

        let Some(outcome) = progression.complete_quest(quest_id, &text)? else {
            writeln!(
                self.out,
                "Quest not completed. Write a journal entry for an open quest first."
            )?;
            return Ok(());
        };

        writeln!(self.out, "Quest complete! +{} XP", outcome.xp_awarded)?;
        if let Some(up) = outcome.level_up {
            writeln!(self.out, "🎉 Level up! You reached level {}.", up.to)?;
        }
        for badge in &outcome.new_badges {
            writeln!(self.out, "🏅 New badge: {}", badge)?;
        }
        Ok(())
    }

    fn progress(&mut self) -> MuseResult<()> {
        self.enter(Route::Achievements)?;
        let progression = ProgressionStore::load(Arc::clone(&self.store))?;
        let progress = progression.progress();

        writeln!(self.out, "Level {}", progress.level)?;
        writeln!(
            self.out,
            "XP {}/{} {}",
            progress.xp,
            xp_for_level(progress.level),
            meter(progression.level_progress())
        )?;
        writeln!(self.out, "Streak: {} days", progress.streak)?;
        writeln!(self.out, "Quests completed: {}", progress.completed_quests)?;
        if progress.badges.is_empty() {
            writeln!(self.out, "Badges: none yet")?;
        } else {
            let badges: Vec<&str> = progress.badges.iter().map(String::as_str).collect();
            writeln!(self.out, "Badges: {}", badges.join(", "))?;
        }
        Ok(())
    }

    // Community

    fn enter_feed(&self, target: FeedTarget) -> MuseResult<()> {
        match target {
            FeedTarget::Local(Board::AcceptanceTherapy) => self.enter(Route::AcceptanceTherapy),
            _ => self.enter(Route::Community),
        }
    }

    fn local_board(&self, board: Board) -> MuseResult<CommunityStore<Store>> {
        let mut community = CommunityStore::load(Arc::clone(&self.store), board)?;
        let flags = self.session().flags()?;
        community.set_anonymous(flags.user_type != Some(UserType::Email));
        Ok(community)
    }

    fn remote_board(&self) -> MuseResult<RemoteCommunity<ReqwestHttpClient>> {
        let liked: BTreeSet<String> = self
            .store
            .get_json(keys::REMOTE_LIKED_POSTS)?
            .unwrap_or_default();
        Ok(RemoteCommunity::with_liked(self.api_client()?, liked))
    }

    async fn post(&mut self, target: FeedTarget, mood: Option<&str>, message: &str) -> MuseResult<()> {
        self.enter_feed(target)?;
        let mood = mood.map(|m| canonical_mood(m).unwrap_or(m));
        let post = match target {
            FeedTarget::Local(board) => self.local_board(board)?.create_post(message, mood)?,
            FeedTarget::Remote => self.remote_board()?.create_post(message, mood).await?,
        };
        match post {
            Some(post) => {
                writeln!(self.out, "Posted {}", post.id)?;
                writeln!(self.out, "{}", share_text(&post))?;
            }
            None => writeln!(self.out, "Nothing to post.")?,
        }
        Ok(())
    }

    async fn feed(&mut self, target: FeedTarget) -> MuseResult<()> {
        self.enter_feed(target)?;
        let posts = match target {
            FeedTarget::Local(board) => self.local_board(board)?.posts().to_vec(),
            FeedTarget::Remote => self.remote_board()?.refresh().await?.to_vec(),
        };
        if posts.is_empty() {
            writeln!(self.out, "No posts yet. Be the first to share.")?;
        }
        for post in &posts {
            print_post(&mut self.out, post)?;
        }
        Ok(())
    }

    async fn like(&mut self, target: FeedTarget, post_id: &str) -> MuseResult<()> {
        self.enter_feed(target)?;
        let post = match target {
            FeedTarget::Local(board) => self.local_board(board)?.toggle_like(post_id)?,
            FeedTarget::Remote => {
                let mut community = self.remote_board()?;
                let post = community.toggle_like(post_id).await?;
                self.store.set_json(keys::REMOTE_LIKED_POSTS, community.liked())?;
                Some(post)
            }
        };
        match post {
            Some(post) => {
                let state = if post.liked { "Liked" } else { "Unliked" };
                writeln!(self.out, "{} ({} likes)", state, post.likes)?;
            }
            None => writeln!(self.out, "No post {}.", post_id)?,
        }
        Ok(())
    }

    async fn comment(&mut self, target: FeedTarget, post_id: &str, text: &str) -> MuseResult<()> {
        self.enter_feed(target)?;
        let comment = match target {
            FeedTarget::Local(board) => self.local_board(board)?.add_comment(post_id, text)?,
            FeedTarget::Remote => self.remote_board()?.add_comment(post_id, text).await?,
        };
        match comment {
            Some(comment) => writeln!(self.out, "Commented {}", comment.id)?,
            None => writeln!(self.out, "Comment not added.")?,
        }
        Ok(())
    }

    async fn reply(
        &mut self,
        target: FeedTarget,
        post_id: &str,
        comment_id: &str,
        text: &str,
    ) -> MuseResult<()> {
        self.enter_feed(target)?;
        let reply = match target {
            FeedTarget::Local(board) => {
                self.local_board(board)?.add_reply(post_id, comment_id, text)?
            }
            FeedTarget::Remote => {
                self.remote_board()?
                    .add_reply(post_id, comment_id, text)
                    .await?
            }
        };
        match reply {
            Some(reply) => writeln!(self.out, "Replied {}", reply.id)?,
            None => writeln!(self.out, "Reply not added.")?,
        }
        Ok(())
    }

    // Journals

    fn recommend(&mut self, mood: &str) -> MuseResult<()> {
        self.enter(Route::Home)?;
        let recommendation = recommend(mood);
        writeln!(self.out, "{}", recommendation.message)?;
        for activity in &recommendation.activities {
            writeln!(self.out, "  • {}", activity)?;
        }
        for resource in &recommendation.resources {
            writeln!(
                self.out,
                "{}: {} ({})",
                resource.title, resource.contact, resource.available
            )?;
        }
        Ok(())
    }

    async fn mood(&mut self, mood: &str, text: Option<String>) -> MuseResult<()> {
        self.enter(Route::Journal)?;
        let mood = canonical_mood(mood).unwrap_or(mood);
        let Some(content) = text else {
            writeln!(self.out, "Add a few words about how you feel.")?;
            return Ok(());
        };

        let mut log = MoodLog::load(Arc::clone(&self.store))?;
        let Some(entry) = log.save_entry(mood, MoodEntryKind::Text { content })? else {
            writeln!(self.out, "Nothing to save.")?;
            return Ok(());
        };
        writeln!(self.out, "Saved {} entry.", entry.mood)?;

        if let Some(text) = entry.text() {
            self.local_board(Board::Community)?
                .create_post(text, Some(&entry.mood))?;
            writeln!(self.out, "Shared with the community.")?;
        }
        Ok(())
    }

    fn moods(&mut self) -> MuseResult<()> {
        self.enter(Route::Journal)?;
        let log = MoodLog::load(Arc::clone(&self.store))?;
        if log.entries().is_empty() {
            writeln!(self.out, "No mood entries yet.")?;
        }
        for entry in log.entries() {
            let body = match &entry.kind {
                MoodEntryKind::Text { content } => content.clone(),
                MoodEntryKind::Voice { audio_ref } => format!("🎙 {}", audio_ref),
            };
            writeln!(
                self.out,
                "{}  {}  {}",
                entry.timestamp.format("%Y-%m-%d %H:%M"),
                entry.mood,
                body
            )?;
        }
        Ok(())
    }

    async fn vent(&mut self, file: &Path, mood: Option<String>) -> MuseResult<()> {
        self.enter(Route::Journal)?;
        let mut capture = AudioCapture::new(FileAudioDevice::new(file));
        capture.start().await?;

        while !capture.is_finished() {
            tokio::time::sleep(METER_REFRESH).await;
            write!(self.out, "\r🎙 {}", meter(capture.level() / 255.0))?;
            self.out.flush()?;
        }
        writeln!(self.out)?;
        let captured = capture.stop().await?;

        let dir = self.config.data_dir()?.join(RECORDINGS_DIR);
        tokio::fs::create_dir_all(&dir).await?;
        let extension = match captured.content_type {
            "audio/webm" => "webm",
            "audio/ogg" => "ogg",
            _ => "wav",
        };
        let mut recording = VentRecording::new("", captured.peak_level, "");
        let path = dir.join(format!("{}.{}", recording.id, extension));
        tokio::fs::write(&path, &captured.audio).await?;

        recording.audio_ref = path.display().to_string();
        recording.mood = mood
            .map(|m| canonical_mood(&m).map(String::from).unwrap_or(m))
            .unwrap_or_else(|| captured.emotion.to_string());

        let mut log = VentLog::load(Arc::clone(&self.store))?;
        log.add(recording.clone())?;
        writeln!(
            self.out,
            "Saved vent {}: {} (intensity {:.0})",
            recording.id, captured.emotion, recording.intensity
        )?;
        Ok(())
    }

    fn vents(&mut self) -> MuseResult<()> {
        self.enter(Route::Journal)?;
        let log = VentLog::load(Arc::clone(&self.store))?;
        if log.entries().is_empty() {
            writeln!(self.out, "No vent recordings yet.")?;
        }
        for entry in log.entries() {
            writeln!(
                self.out,
                "{}  {}  {} {}  {}",
                entry.id,
                entry.timestamp.format("%Y-%m-%d %H:%M"),
                entry.emotion.emoji(),
                entry.mood,
                entry.audio_ref
            )?;
            if let Some(notes) = &entry.notes {
                writeln!(self.out, "    {}", notes)?;
            }
        }
        Ok(())
    }

    fn vent_notes(&mut self, id: &str, notes: &str) -> MuseResult<()> {
        self.enter(Route::Journal)?;
        let mut log = VentLog::load(Arc::clone(&self.store))?;
        if log.set_notes(id, notes)? {
            writeln!(self.out, "Notes updated.")?;
        } else {
            writeln!(self.out, "No vent recording {}.", id)?;
        }
        Ok(())
    }

    fn vent_delete(&mut self, id: &str) -> MuseResult<()> {
        self.enter(Route::Journal)?;
        let mut log = VentLog::load(Arc::clone(&self.store))?;
        let audio_ref = log.get(id).map(|entry| entry.audio_ref.clone());
        if !log.delete(id)? {
            writeln!(self.out, "No vent recording {}.", id)?;
            return Ok(());
        }
        if let Some(path) = audio_ref {
            if let Err(e) = std::fs::remove_file(&path) {
                tracing::debug!(%path, error = %e, "recording file not removed");
            }
        }
        writeln!(self.out, "Deleted.")?;
        Ok(())
    }

    async fn analyze(&mut self, file: &Path) -> MuseResult<()> {
        self.enter(Route::Journal)?;
        let audio = tokio::fs::read(file).await?;
        let file_name = file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("journal.wav");
        let content_type = FileAudioDevice::content_type_for(file);

        let analysis = self
            .api_client()?
            .analyze_audio(audio.into(), file_name, content_type)
            .await?;

        writeln!(self.out, "Transcript: {}", analysis.transcript)?;
        writeln!(self.out, "Mood: {}", analysis.mood)?;
        for suggestion in &analysis.suggestions {
            writeln!(
                self.out,
                "  [{:?}] {}: {}",
                suggestion.kind, suggestion.title, suggestion.description
            )?;
        }

        let mut log = MoodLog::load(Arc::clone(&self.store))?;
        log.save_entry(
            &analysis.mood,
            MoodEntryKind::Voice {
                audio_ref: file.display().to_string(),
            },
        )?;
        Ok(())
    }
}

/// A text progress bar for a 0.0-1.0 fraction.
fn meter(fraction: f32) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * METER_WIDTH as f32).round()) as usize;
    format!("[{}{}]", "#".repeat(filled), " ".repeat(METER_WIDTH - filled))
}

fn print_post(out: &mut impl Write, post: &Post) -> std::io::Result<()> {
    let mood = post.mood.as_deref().map(|m| format!(" · {}", m)).unwrap_or_default();
    writeln!(
        out,
        "{}  {}{}  {}",
        post.id,
        post.author,
        mood,
        post.timestamp.format("%Y-%m-%d %H:%M")
    )?;
    writeln!(out, "  {}", post.message)?;
    let heart = if post.liked { "♥" } else { "♡" };
    writeln!(out, "  {} {}  💬 {}", heart, post.likes, post.comments.len())?;
    for comment in &post.comments {
        writeln!(out, "    {}  {}: {}", comment.id, comment.author, comment.text)?;
        for reply in &comment.replies {
            writeln!(out, "      ↳ {}: {}", reply.author, reply.text)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_bounds() {
        assert_eq!(meter(0.0), format!("[{}]", " ".repeat(METER_WIDTH)));
        assert_eq!(meter(1.5), format!("[{}]", "#".repeat(METER_WIDTH)));
        assert_eq!(meter(0.5).matches('#').count(), METER_WIDTH / 2);
    }
}
