//! Two selectors side by side in the terminal.
//!
//! Move the mouse to hover, click to open and choose, use the wheel to scroll
//! an open list. `r` picks a new palette, `c` random colors, `q` quits.

use std::fmt::Display;
use std::process::ExitCode;
use std::time::Duration;

use scrollsel::{ClickOutcome, Color, DrawTarget, FontHandle, Point, Selector, TextStyle};
use scrollsel_term::shuffle::{random_colors, random_palette};
use scrollsel_term::text::fit_to_width;
use scrollsel_term::{
    dispatch, logging, paths, settings, translate, Buffer, DemoSettings, HostEvent, Terminal,
    TermError,
};

const FONT: FontHandle = FontHandle(0);
const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("[demo] {}", e);
            eprintln!("scrollsel-demo: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), TermError> {
    let config_file = paths::config_file();
    let settings = match &config_file {
        Some(path) => settings::load(path)?,
        None => DemoSettings::default(),
    };

    if let Some(path) = paths::log_file() {
        if let Some(dir) = path.parent() {
            paths::rotate_logs(dir);
        }
        logging::init(&path, logging::parse_level(&settings.log_level))?;
    }

    // First run: leave an editable copy of the defaults behind
    if let Some(path) = config_file.filter(|path| !path.exists()) {
        match settings::save(&path, &settings) {
            Ok(()) => log::info!("[demo] wrote default settings to {}", path.display()),
            Err(e) => log::warn!("[demo] could not write {}: {}", path.display(), e),
        }
    }

    let mut numbers = Selector::with_config(
        FONT,
        vec![-642, 234, 12, 0, -3],
        settings.numbers_at,
        settings.selector.clone(),
    )?;
    let mut words = Selector::with_config(
        FONT,
        ["lorem", "ipsum", "test", "whatever", "who cares"]
            .map(String::from)
            .to_vec(),
        settings.words_at,
        settings.selector.clone(),
    )?;

    let mut rng = rand::rng();
    let mut terminal = Terminal::new()?;
    log::info!("[demo] started");

    loop {
        terminal.render(|buffer| paint(buffer, &numbers, &words))?;

        for event in terminal.poll(Some(POLL_INTERVAL))? {
            match translate(&event) {
                HostEvent::Quit => {
                    log::info!("[demo] quit");
                    return Ok(());
                }
                HostEvent::ShufflePalette => {
                    let palette = random_palette(&mut rng);
                    numbers.set_palette(palette);
                    words.set_palette(palette);
                }
                HostEvent::ShuffleColors => {
                    let [light, dark, selected, selected_text] = random_colors(&mut rng);
                    numbers.set_colors(light, dark, selected, selected_text);
                    words.set_colors(light, dark, selected, selected_text);
                }
                HostEvent::Ignored | HostEvent::Resize { .. } => {}
                host_event => {
                    let outcome = dispatch(&mut numbers, &host_event);
                    report("numbers", &numbers, outcome);
                    let outcome = dispatch(&mut words, &host_event);
                    report("words", &words, outcome);
                }
            }
        }
    }
}

fn report<T: Display>(name: &str, selector: &Selector<T>, outcome: Option<ClickOutcome>) {
    if let Some(ClickOutcome::Committed(index)) = outcome {
        log::info!(
            "[demo] {} selected #{} = {}",
            name,
            index,
            selector.selection()
        );
    }
}

/// Closed selectors first so an open list is painted over its neighbour.
fn paint(buffer: &mut Buffer, numbers: &Selector<i32>, words: &Selector<String>) {
    let width = buffer.width() as usize;
    let bottom = buffer.height().saturating_sub(1) as f32;
    let style = TextStyle {
        color: Color::rgb(169, 169, 169),
        font: FONT,
        char_size: 1,
    };

    buffer.draw_text(
        &fit_to_width("scrollsel  [r] palette  [c] colors  [q] quit", width),
        Point::new(0.0, 0.0),
        &style,
    );
    buffer.draw_text(
        &fit_to_width(
            &format!(
                "numbers: {}   words: {}",
                numbers.selection(),
                words.selection()
            ),
            width,
        ),
        Point::new(0.0, bottom),
        &style,
    );

    if numbers.is_open() {
        words.draw(buffer);
        numbers.draw(buffer);
    } else {
        numbers.draw(buffer);
        words.draw(buffer);
    }
}
