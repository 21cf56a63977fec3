use crate::audio::{DeviceSpeaker, Muted, Speaker};
use crate::cli::Args;
use crate::config::{load_settings, project_paths, Settings};
use crate::document::Document;
use crate::geom::Viewport;
use crate::input::{collect_events_nonblocking, translate, Action};
use crate::logging;
use crate::page::Page;
use crate::render::{paint, Terminal};
use crate::timers::Millis;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

pub(crate) struct App {
    settings: Settings,
    term: Terminal,
    doc: Document,
    rng: StdRng,
    speaker: Box<dyn Speaker>,
    /// Wall-clock start of the current page; its timers count from here.
    started: Instant,
    should_quit: bool,
    full_redraw: bool,
}

impl App {
    fn init(page: Page, settings: Settings) -> anyhow::Result<Self> {
        let mut rng = if settings.seed == 0 {
            StdRng::from_entropy()
        } else {
            StdRng::seed_from_u64(settings.seed)
        };
        let speaker: Box<dyn Speaker> = if settings.sound {
            Box::new(DeviceSpeaker)
        } else {
            Box::new(Muted)
        };

        let term = Terminal::begin()?;
        let doc = Document::load(page, Viewport::from_terminal(term.cols, term.rows), &mut rng);

        Ok(Self {
            settings,
            term,
            doc,
            rng,
            speaker,
            started: Instant::now(),
            should_quit: false,
            full_redraw: true,
        })
    }

    fn run(&mut self) -> anyhow::Result<()> {
        let frame_dt = Duration::from_secs_f32(1.0 / self.settings.fps_cap as f32);

        while !self.should_quit {
            let frame_start = Instant::now();

            for ev in collect_events_nonblocking(frame_dt)? {
                for action in translate(&mut self.doc.scene, ev) {
                    self.apply(action);
                }
            }
            if self.should_quit {
                break;
            }

            let now = self.started.elapsed().as_millis() as Millis;
            if let Some(page) = self.doc.advance(now, &mut self.rng, &*self.speaker) {
                self.navigate(page);
            }

            self.render_frame()?;

            // frame cap
            spin_sleep(frame_dt, frame_start);
        }
        Ok(())
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Resize(cols, rows) => {
                self.term.resize(cols, rows);
                self.doc
                    .resize(Viewport::from_terminal(cols, rows), &mut self.rng);
                self.full_redraw = true;
            }
            Action::Visible => self.doc.became_visible(&mut self.rng),
            Action::Scroll(delta) => self.doc.scroll(delta),
            Action::Ui(ev) => self.doc.handle(ev, &mut self.rng, &*self.speaker),
        }
    }

    /// Replaces the whole document; whatever the old page still had
    /// scheduled goes with it.
    fn navigate(&mut self, page: Page) {
        let viewport = self.doc.scene.viewport;
        self.doc = Document::load(page, viewport, &mut self.rng);
        self.started = Instant::now();
        self.full_redraw = true;
    }

    fn render_frame(&mut self) -> anyhow::Result<()> {
        paint(
            &mut self.term.cur,
            &self.doc.scene,
            self.doc.now(),
            self.settings.enable_color,
        );
        self.term.present(!self.full_redraw)?;
        self.full_redraw = false;
        Ok(())
    }
}

pub(crate) fn run(args: Args) -> anyhow::Result<()> {
    let paths = project_paths().ok();

    let log_path = args
        .log_file
        .clone()
        .or_else(|| paths.as_ref().map(|p| p.log_path.clone()));
    if let Some(path) = &log_path {
        logging::init(path);
    }

    let settings = paths
        .as_ref()
        .map(|p| load_settings(&p.settings_path))
        .unwrap_or_default()
        .apply_args(&args);
    tracing::info!(?settings, page = %args.page, "starting");

    let mut app = App::init(args.page, settings)?;
    let res = app.run();
    // the terminal comes back even when the loop failed
    let restored = app.term.end();
    res.and(restored)
}

/* -----------------------------
   Frame pacing helper
------------------------------ */

fn spin_sleep(target: Duration, now: Instant) {
    let end = now + target;
    loop {
        let t = Instant::now();
        if t >= end {
            break;
        }
        let left = end - t;
        if left > Duration::from_millis(2) {
            std::thread::sleep(Duration::from_millis(1));
        } else {
            std::hint::spin_loop();
        }
    }
}
