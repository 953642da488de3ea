// ABOUTME: Terminal prompts for rooms and configuration files.
// ABOUTME: dialoguer-backed Chooser implementations, run on the blocking thread pool.

use dialoguer::{Input, Select, theme::ColorfulTheme};
use fleetctl::config::list_config_files;
use fleetctl::error::{Error, Result};
use fleetctl::prompt::Chooser;
use fleetctl::rooms::{RoomBook, RoomRecord};
use std::path::{Path, PathBuf};

const NEW_ROOM: &str = "Enter a new room ID with remark";

fn prompt_error(e: dialoguer::Error) -> Error {
    Error::Prompt(e.to_string())
}

/// Run a terminal prompt without blocking an async worker thread.
async fn blocking_prompt<T, F>(prompt: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(prompt)
        .await
        .map_err(|e| Error::Prompt(format!("prompt task failed: {e}")))?
}

/// Ask for a room from the book at `rooms_file`, recording a new one if entered.
pub async fn choose_room(rooms_file: PathBuf) -> Result<u64> {
    blocking_prompt(move || {
        let book = RoomBook::new(rooms_file);
        RoomPicker::new(&book).pick().map(|record| record.room_id)
    })
    .await
}

/// Ask for one of the configuration files in `dir`.
pub async fn choose_config(dir: PathBuf) -> Result<PathBuf> {
    blocking_prompt(move || ConfigPicker::new(&dir).pick()).await
}

/// Choose a stored room or record a new one.
pub struct RoomPicker<'a> {
    book: &'a RoomBook,
    theme: ColorfulTheme,
}

impl<'a> RoomPicker<'a> {
    pub fn new(book: &'a RoomBook) -> Self {
        Self {
            book,
            theme: ColorfulTheme::default(),
        }
    }

    fn enter_new_room(&self) -> Result<RoomRecord> {
        let room_id: u64 = Input::with_theme(&self.theme)
            .with_prompt("Enter new room ID")
            .interact_text()
            .map_err(prompt_error)?;
        let remark: String = Input::with_theme(&self.theme)
            .with_prompt("Enter remark for this room ID")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;
        self.book.add(room_id, &remark)
    }
}

impl Chooser for RoomPicker<'_> {
    type Item = RoomRecord;

    fn list_options(&self) -> Result<Vec<RoomRecord>> {
        self.book.records()
    }

    fn choose(&self, options: Vec<RoomRecord>) -> Result<RoomRecord> {
        let mut labels: Vec<String> = options.iter().map(RoomRecord::to_string).collect();
        labels.push(NEW_ROOM.to_string());

        let selected = Select::with_theme(&self.theme)
            .with_prompt("Choose a room ID or add new one with remark")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(prompt_error)?;

        match options.into_iter().nth(selected) {
            Some(record) => Ok(record),
            None => self.enter_new_room(),
        }
    }
}

/// Choose one of the JSON files in the config directory.
pub struct ConfigPicker {
    dir: PathBuf,
    theme: ColorfulTheme,
}

impl ConfigPicker {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            theme: ColorfulTheme::default(),
        }
    }
}

impl Chooser for ConfigPicker {
    type Item = PathBuf;

    fn list_options(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }
        Ok(list_config_files(&self.dir)?
            .into_iter()
            .map(PathBuf::from)
            .collect())
    }

    fn choose(&self, options: Vec<PathBuf>) -> Result<PathBuf> {
        if options.is_empty() {
            return Err(Error::NoConfigFiles(self.dir.clone()));
        }

        let labels: Vec<String> = options.iter().map(|p| p.display().to_string()).collect();
        let selected = Select::with_theme(&self.theme)
            .with_prompt("Choose a configuration file")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(prompt_error)?;

        Ok(self.dir.join(&options[selected]))
    }
}
