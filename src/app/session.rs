use crate::{
    app::host::{CarouselKind, Host, Slot},
    carousel::controller::{CarouselController, ControlState},
    config::SiteConfig,
    content::model::ContentBundle,
    foundation::{
        core::{ScrollProgress, fmt_num},
        error::FolioResult,
    },
    nav::{MenuToggle, NavLink, render_nav_links, scroll_target},
    render::{
        decor::{EXPANSION_END, LensRing, ambient_pose, generate_rings, render_rings},
        sections::{render_certificates, render_experience, render_projects, render_skills},
    },
    scroll::{
        engine::ScrollEngine,
        throttle::{FrameHandle, FrameThrottle},
    },
};

/// A user action on one of the page controls.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Control {
    Prev { carousel: CarouselKind },
    Next { carousel: CarouselKind },
    Dot { carousel: CarouselKind, index: usize },
    NavLink { target: f64 },
    Hamburger,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Scroll,
    AnimationFrame(FrameHandle),
    Click(Control),
    Resize,
}

/// All runtime state of one page view.
#[derive(Debug)]
pub struct Session {
    config: SiteConfig,
    engine: ScrollEngine,
    throttle: FrameThrottle,
    rings: Vec<LensRing>,
    /// Clamped progress the rings were last drawn at.
    ring_progress: Option<f64>,
    nav: Vec<NavLink>,
    menu: MenuToggle,
    content: Option<ContentBundle>,
    projects: Option<CarouselController>,
    certificates: Option<CarouselController>,
}

impl Session {
    pub fn new(config: SiteConfig) -> FolioResult<Self> {
        config.validate()?;
        let engine = ScrollEngine::new(config.schedule.clone(), config.interactivity_threshold)?;
        let rings = generate_rings(config.lens.ring_count, config.lens.seed);
        let nav = config.nav_links();
        Ok(Self {
            config,
            engine,
            throttle: FrameThrottle::new(),
            rings,
            ring_progress: None,
            nav,
            menu: MenuToggle::default(),
            content: None,
            projects: None,
            certificates: None,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn engine(&self) -> &ScrollEngine {
        &self.engine
    }

    pub fn rings(&self) -> &[LensRing] {
        &self.rings
    }

    pub fn menu(&self) -> MenuToggle {
        self.menu
    }

    pub fn content(&self) -> Option<&ContentBundle> {
        self.content.as_ref()
    }

    pub fn carousel(&self, kind: CarouselKind) -> Option<&CarouselController> {
        match kind {
            CarouselKind::Projects => self.projects.as_ref(),
            CarouselKind::Certificates => self.certificates.as_ref(),
        }
    }

    fn carousel_mut(&mut self, kind: CarouselKind) -> Option<&mut CarouselController> {
        match kind {
            CarouselKind::Projects => self.projects.as_mut(),
            CarouselKind::Certificates => self.certificates.as_mut(),
        }
    }

    /// Startup pass: navigation, decoration, then visibility and interactivity at the
    /// host's current scroll position.
    #[tracing::instrument(skip_all)]
    pub fn boot<H: Host + ?Sized>(&mut self, host: &mut H) {
        if host.exists(Slot::NavLinks) {
            host.set_inner_html(Slot::NavLinks, &render_nav_links(&self.nav));
        }
        let progress = ScrollProgress::from_metrics(host.scroll_metrics());
        self.apply_scroll(host, progress);
        self.apply_interactivity(host);
        tracing::debug!(progress = progress.get(), rings = self.rings.len(), "session booted");
    }

    /// Continuation of the content load. A failed load is logged and leaves every
    /// content slot empty.
    #[tracing::instrument(skip_all)]
    pub fn content_loaded<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        content: FolioResult<ContentBundle>,
    ) -> FolioResult<()> {
        let bundle = match content {
            Ok(bundle) => bundle,
            Err(e) => {
                tracing::error!(error = %e, "content load failed, sections left empty");
                return Ok(());
            }
        };

        fill(host, Slot::Track(CarouselKind::Projects), || {
            render_projects(&bundle.projects)
        });
        fill(host, Slot::SkillsContainer, || render_skills(&bundle.skills));
        fill(host, Slot::ExperienceContainer, || {
            render_experience(&bundle.experience)
        });
        fill(host, Slot::Track(CarouselKind::Certificates), || {
            render_certificates(&bundle.certificates)
        });

        if host.exists(Slot::Track(CarouselKind::Projects)) {
            self.projects = Some(CarouselController::initialize(
                bundle.projects.len(),
                self.config.projects,
            )?);
            self.apply_carousel(host, CarouselKind::Projects);
        }
        if host.exists(Slot::Track(CarouselKind::Certificates)) {
            self.certificates = Some(CarouselController::initialize(
                bundle.certificates.len(),
                self.config.certificates,
            )?);
            self.apply_carousel(host, CarouselKind::Certificates);
        }

        tracing::info!("content rendered");
        self.content = Some(bundle);
        Ok(())
    }

    pub fn handle<H: Host + ?Sized>(&mut self, host: &mut H, event: Event) {
        match event {
            Event::Scroll => {
                let progress = ScrollProgress::from_metrics(host.scroll_metrics());
                self.apply_scroll(host, progress);
                let handle = self.throttle.schedule(host);
                tracing::trace!(handle = handle.0, progress = progress.get(), "scroll");
            }
            Event::AnimationFrame(handle) => {
                if self.throttle.fire(handle) {
                    self.apply_interactivity(host);
                } else {
                    tracing::trace!(handle = handle.0, "stale frame ignored");
                }
            }
            Event::Click(control) => self.click(host, control),
            Event::Resize => self.apply_carousel(host, CarouselKind::Certificates),
        }
    }

    fn click<H: Host + ?Sized>(&mut self, host: &mut H, control: Control) {
        match control {
            Control::Prev { carousel } => {
                let Some(c) = self.carousel_mut(carousel) else {
                    return;
                };
                // a disabled button receives no pointer events
                if c.prev_control() == Some(ControlState::Disabled) {
                    tracing::debug!(?carousel, "prev is disabled");
                    return;
                }
                c.prev();
                self.apply_carousel(host, carousel);
            }
            Control::Next { carousel } => {
                let Some(c) = self.carousel_mut(carousel) else {
                    return;
                };
                if c.next_control() == Some(ControlState::Disabled) {
                    tracing::debug!(?carousel, "next is disabled");
                    return;
                }
                c.next();
                self.apply_carousel(host, carousel);
            }
            Control::Dot { carousel, index } => {
                let Some(c) = self.carousel_mut(carousel) else {
                    return;
                };
                c.go_to(i64::try_from(index).unwrap_or(i64::MAX));
                self.apply_carousel(host, carousel);
            }
            Control::NavLink { target } => {
                let offset = scroll_target(host.scroll_metrics(), target);
                tracing::debug!(nav_target = target, offset, "nav scroll");
                host.scroll_to(offset);
                self.menu.close();
                self.apply_menu(host);
            }
            Control::Hamburger => {
                self.menu.toggle();
                self.apply_menu(host);
            }
        }
    }

    fn apply_scroll<H: Host + ?Sized>(&mut self, host: &mut H, progress: ScrollProgress) {
        self.engine.update(progress);
        for (cfg, v) in self.engine.sections() {
            let slot = Slot::Section(cfg.section);
            if !host.exists(slot) {
                continue;
            }
            host.set_style(slot, "opacity", &fmt_num(v.opacity));
            host.set_style(slot, "transform", &v.css_transform(cfg.axis));
        }

        let p = progress.get();
        let pose = ambient_pose(&self.rings, p);
        if host.exists(Slot::MainTitle) {
            host.set_style(Slot::MainTitle, "opacity", &fmt_num(pose.title_opacity));
        }
        if host.exists(Slot::LensContainer) {
            host.set_style(Slot::LensContainer, "transform", &pose.lens_transform());
            // poses stop changing once the rings are fully expanded
            let ring_p = p.min(EXPANSION_END);
            if self.ring_progress != Some(ring_p) {
                host.set_inner_html(Slot::LensContainer, &render_rings(&self.rings, ring_p));
                self.ring_progress = Some(ring_p);
            }
        }
    }

    fn apply_interactivity<H: Host + ?Sized>(&self, host: &mut H) {
        for (id, interactive) in self.engine.interactivity() {
            let slot = Slot::Section(id);
            if host.exists(slot) {
                let value = if interactive { "auto" } else { "none" };
                host.set_style(slot, "pointer-events", value);
            }
        }
    }

    fn apply_carousel<H: Host + ?Sized>(&self, host: &mut H, kind: CarouselKind) {
        let Some(c) = self.carousel(kind) else {
            return;
        };
        let track = Slot::Track(kind);
        let measured = if c.needs_measurement() {
            host.first_item_width(track)
        } else {
            None
        };
        let view = c.view(measured);

        if host.exists(track) {
            host.set_style(track, "transform", &view.track_transform());
        }
        let dots = Slot::Dots(kind);
        if host.exists(dots) {
            host.set_inner_html(dots, &c.render_indicators());
        }
        for (slot, state) in [(Slot::Prev(kind), view.prev), (Slot::Next(kind), view.next)] {
            let Some(state) = state else { continue };
            if host.exists(slot) {
                host.set_style(slot, "opacity", state.opacity());
                host.set_style(slot, "pointer-events", state.pointer_events());
            }
        }
        tracing::debug!(?kind, page = view.page, offset = view.offset_px, "carousel applied");
    }

    fn apply_menu<H: Host + ?Sized>(&self, host: &mut H) {
        let open = self.menu.is_open();
        for slot in [Slot::Hamburger, Slot::NavLinks] {
            if host.exists(slot) {
                host.set_class(slot, "active", open);
            }
        }
    }
}

fn fill<H: Host + ?Sized>(host: &mut H, slot: Slot, render: impl FnOnce() -> String) {
    if host.exists(slot) {
        host.set_inner_html(slot, &render());
    } else {
        tracing::warn!(slot = slot.key(), "attachment point missing, skipped");
    }
}
