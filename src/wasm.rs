//! Browser boundary: one `Othello` object per game window.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::game::GameSession;

#[wasm_bindgen]
pub struct Othello {
    session: GameSession,
}

#[wasm_bindgen]
impl Othello {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
        }
    }

    /// Full snapshot for rendering.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.snapshot())
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.legal_moves())
    }

    /// Plays `(x, y)` for the color to move and returns the new snapshot.
    pub fn play(&mut self, x: u8, y: u8) -> Result<JsValue, JsValue> {
        self.session
            .play_xy(x, y)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        self.state()
    }

    /// Final result, or `null` while the game is running.
    pub fn result(&self) -> Result<JsValue, JsValue> {
        match self.session.result() {
            Some(result) => to_js(&result),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }
}

impl Default for Othello {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}
