use std::error::Error;
use std::marker::PhantomData;

use tracing::info;
use winit::{
    dpi::PhysicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::MandelbrotEngine;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::input::gui::{
    app::{gui_app::GuiApp, ports::presenter::GuiPresenterPort},
    commands::ports::presenter_factory::GuiPresenterFactoryPort,
};

const FALLBACK_SIZE: PhysicalSize<u32> = PhysicalSize {
    width: 800,
    height: 600,
};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: MandelbrotConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            config: MandelbrotConfig::default(),
            _phantom: PhantomData,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: MandelbrotConfig) -> Self {
        self.config = config;
        self
    }

    /// Opens a fixed-size window at half the primary monitor's resolution
    /// and blocks until it is closed.
    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoop::new()?;

        let size = event_loop
            .primary_monitor()
            .map(|monitor| monitor.size())
            .filter(|size| size.width >= 2 && size.height >= 2)
            .map(|size| PhysicalSize::new(size.width / 2, size.height / 2))
            .unwrap_or(FALLBACK_SIZE);

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Set")
                .with_inner_size(size)
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        // The window manager may not honour the requested size exactly
        let inner_size = window.inner_size();
        let engine =
            MandelbrotEngine::with_config(inner_size.width, inner_size.height, self.config)?;
        let presenter = self.presenter_factory.build(window)?;

        info!(
            width = inner_size.width,
            height = inner_size.height,
            "window opened"
        );

        GuiApp::new(window, &event_loop, presenter, engine).run(event_loop)?;

        Ok(())
    }
}
