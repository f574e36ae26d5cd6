//! Browser bootstrap: binds an existing `<canvas>` element to the engine,
//! wires DOM events, starts the socket, and drives the frame loop.
//!
//! Everything here runs on the single browser thread: pointer events, wheel
//! events, inbound messages, and animation-frame ticks are discrete
//! callbacks, so no locking is needed — each callback leaves the engine
//! consistent before returning.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::channel::mpsc::UnboundedSender;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, WheelEvent};

use board::engine::{Action, Engine};
use board::input::{Button, WheelDelta};
use board::viewport::Point;
use protocol::{ClientMessage, encode_client_message};

use crate::net::socket;
use crate::state::session::ConnectionStatus;

/// Mount the game client onto an existing canvas element and connect to the
/// game server at `ws_url`. The host page owns canvas creation and sizing.
///
/// # Errors
///
/// Returns `Err` when the canvas has no 2D context or event wiring fails.
#[wasm_bindgen]
pub fn mount(canvas: HtmlCanvasElement, ws_url: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // A second mount would find the logger already set; that's fine.
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("logger already initialized");
    }

    let engine = Rc::new(RefCell::new(Engine::new(canvas.clone())?));
    let status = Rc::new(Cell::new(ConnectionStatus::Disconnected));
    let tx = socket::spawn_socket(ws_url.to_owned(), engine.clone(), status);

    wire_pointer_events(&canvas, &engine, &tx)?;
    start_frame_loop(&engine);
    Ok(())
}

fn button_of(event: &MouseEvent) -> Option<Button> {
    match event.button() {
        0 => Some(Button::Primary),
        1 => Some(Button::Middle),
        2 => Some(Button::Secondary),
        _ => None,
    }
}

fn event_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.offset_x()), f64::from(event.offset_y()))
}

/// Forward engine actions to the server channel. Render requests need no
/// handling here: the frame loop redraws the full grid every tick.
fn forward_actions(actions: &[Action], tx: &UnboundedSender<String>) {
    for action in actions {
        if let Action::SendClick(position) = action {
            let text = encode_client_message(&ClientMessage::Click { position: *position });
            if !socket::send_text(tx, text) {
                log::warn!("click dropped: channel closed");
            }
        }
    }
}

fn wire_pointer_events(
    canvas: &HtmlCanvasElement,
    engine: &Rc<RefCell<Engine>>,
    tx: &UnboundedSender<String>,
) -> Result<(), JsValue> {
    {
        let engine = engine.clone();
        let tx = tx.clone();
        let on_down = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            if let Some(button) = button_of(&event) {
                let actions = engine.borrow_mut().on_pointer_down(event_point(&event), button);
                forward_actions(&actions, &tx);
            }
        });
        canvas.add_event_listener_with_callback("mousedown", on_down.as_ref().unchecked_ref())?;
        on_down.forget();
    }

    {
        let engine = engine.clone();
        let tx = tx.clone();
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let actions = engine.borrow_mut().on_pointer_move(event_point(&event));
            forward_actions(&actions, &tx);
        });
        canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();
    }

    {
        let engine = engine.clone();
        let tx = tx.clone();
        let on_up = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            if let Some(button) = button_of(&event) {
                let actions = engine.borrow_mut().on_pointer_up(event_point(&event), button);
                forward_actions(&actions, &tx);
            }
        });
        canvas.add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref())?;
        on_up.forget();
    }

    {
        // Leaving the surface mid-gesture counts as a release, so a drag
        // can't get stuck when the pointer exits the canvas.
        let engine = engine.clone();
        let tx = tx.clone();
        let on_leave = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
            let actions = engine.borrow_mut().on_pointer_leave();
            forward_actions(&actions, &tx);
        });
        canvas.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
        on_leave.forget();
    }

    {
        let engine = engine.clone();
        let tx = tx.clone();
        let on_wheel = Closure::<dyn FnMut(WheelEvent)>::new(move |event: WheelEvent| {
            event.prevent_default();
            let delta = WheelDelta { dx: event.delta_x(), dy: event.delta_y() };
            let actions = engine.borrow_mut().on_wheel(event_point(&event), delta);
            forward_actions(&actions, &tx);
        });
        canvas.add_event_listener_with_callback("wheel", on_wheel.as_ref().unchecked_ref())?;
        on_wheel.forget();
    }

    Ok(())
}

/// Drive rendering from a self-rescheduling animation-frame tick: each tick
/// re-requests the next one, then draws. Cancellation would simply stop
/// re-requesting; this client renders for the life of the page.
fn start_frame_loop(engine: &Rc<RefCell<Engine>>) {
    let handle: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let starter = handle.clone();

    let engine = engine.clone();
    *starter.borrow_mut() = Some(Closure::new(move || {
        if let Some(tick) = handle.borrow().as_ref() {
            request_animation_frame(tick);
        }
        if let Err(e) = engine.borrow().render() {
            log::error!("render pass failed: {e:?}");
        }
    }));

    if let Some(tick) = starter.borrow().as_ref() {
        request_animation_frame(tick);
    }
}

fn request_animation_frame(tick: &Closure<dyn FnMut()>) {
    let Some(window) = web_sys::window() else {
        log::error!("no global window; frame loop stopped");
        return;
    };
    if window.request_animation_frame(tick.as_ref().unchecked_ref()).is_err() {
        log::error!("requestAnimationFrame failed; frame loop stopped");
    }
}
