use crate::events::AppEvent;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use ringstat::{CategorySeries, StatsView};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

pub struct AppModel {
    pub view: Rc<RefCell<StatsView>>,
    pub drawing_area: gtk::DrawingArea,
    tick: Option<gtk::TickCallbackId>,
}

#[derive(Debug)]
pub enum AppMsg {
    SetData(CategorySeries),
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::SetData(series) => AppMsg::SetData(series),
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (
        StatsView,
        Option<CategorySeries>,
        async_channel::Receiver<AppEvent>,
    );
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("ringstat"),
            set_default_size: (400, 400),

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (view, initial, rx) = init;

        // the view reads nothing from the model, so it can be built first
        let widgets = view_output!();

        let model = AppModel {
            view: Rc::new(RefCell::new(view)),
            drawing_area: widgets.drawing_area.clone(),
            tick: None,
        };

        let view_draw = model.view.clone();
        widgets.drawing_area.set_draw_func(move |_, cr, _, _| {
            let mut cr = cr.clone();
            if let Err(e) = view_draw.borrow().draw(&mut cr) {
                log::error!("Drawing error: {}", e);
            }
        });

        let view_resize = model.view.clone();
        widgets
            .drawing_area
            .connect_resize(move |_, width, height| {
                view_resize
                    .borrow_mut()
                    .on_resize(width as f64, height as f64);
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        if let Some(series) = initial {
            sender.input(AppMsg::SetData(series));
        }

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::SetData(series) => self.restart_animation(series),
        }
    }
}

impl AppModel {
    /// Swaps in a fresh frame-clock callback bound to the new run. The old
    /// callback is removed first so only one run ever drives the view.
    fn restart_animation(&mut self, series: CategorySeries) {
        let task = self.view.borrow_mut().set_data(series, Instant::now());

        if let Some(previous) = self.tick.take() {
            previous.remove();
        }

        let view = self.view.clone();
        self.tick = Some(self.drawing_area.add_tick_callback(move |area, _| {
            let action = view.borrow_mut().tick(task, Instant::now());
            if action.should_redraw {
                area.queue_draw();
            }
            if action.finished {
                glib::ControlFlow::Break
            } else {
                glib::ControlFlow::Continue
            }
        }));

        self.drawing_area.queue_draw();
    }
}
