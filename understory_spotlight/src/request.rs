// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The payload handed to the renderer, and the one-way sink it is sent through.

use std::sync::mpsc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::host::Capabilities;
use crate::step::StepDescriptor;

/// Everything the renderer needs to present a sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PresentationRequest {
    /// Sequence key, for the renderer's own bookkeeping.
    pub key: String,
    /// Steps in display order. Never empty.
    pub steps: Vec<StepDescriptor>,
    /// Whether the host's system UI was fully visible at dispatch.
    pub system_ui_visible: bool,
    /// Renderer features the host supports.
    pub capabilities: Capabilities,
}

impl PresentationRequest {
    /// Encode as JSON for hosts that marshal the request across a process or FFI boundary.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a request produced by [`Self::to_json`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Union of the capabilities every step asks for.
    pub fn required_capabilities(&self) -> Capabilities {
        self.steps
            .iter()
            .fold(Capabilities::empty(), |acc, s| acc | s.required_capabilities())
    }
}

/// One-way hand-off to the renderer.
///
/// There is no reply: the core never observes completion, cancellation, or failure.
pub trait RenderSink {
    /// Enqueue `request` for presentation.
    fn send(&mut self, request: PresentationRequest);
}

/// Records requests in order.
impl RenderSink for Vec<PresentationRequest> {
    fn send(&mut self, request: PresentationRequest) {
        self.push(request);
    }
}

/// Hands requests to a renderer thread or event loop.
///
/// A disconnected receiver is logged and otherwise ignored.
impl RenderSink for mpsc::Sender<PresentationRequest> {
    fn send(&mut self, request: PresentationRequest) {
        if let Err(mpsc::SendError(request)) = mpsc::Sender::send(self, request) {
            warn!(key = %request.key, "renderer is gone, request dropped");
        }
    }
}

impl<R: RenderSink + ?Sized> RenderSink for &mut R {
    fn send(&mut self, request: PresentationRequest) {
        (**self).send(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepTemplate;
    use kurbo::Rect;
    use understory_focus_shape::{DisplayDensity, FocusKind};

    fn request(kind: FocusKind) -> PresentationRequest {
        let template = StepTemplate {
            target: Some(Rect::new(10.0, 10.0, 30.0, 20.0)),
            title: Some("Search".into()),
            text: Some("Find anything".into()),
            kind,
            margin_dp: 2.0,
            ..Default::default()
        };
        PresentationRequest {
            key: "tour".into(),
            steps: vec![StepDescriptor::from_template(&template, DisplayDensity::HDPI).unwrap()],
            system_ui_visible: true,
            capabilities: Capabilities::default(),
        }
    }

    #[test]
    fn json_preserves_request() {
        let req = request(FocusKind::RoundedRectangle);
        let json = req.to_json().unwrap();
        assert!(json.contains("\"key\":\"tour\""), "{json}");
        assert_eq!(PresentationRequest::from_json(&json).unwrap(), req);
    }

    #[test]
    fn channel_sink_delivers_and_tolerates_disconnect() {
        let (mut tx, rx) = mpsc::channel::<PresentationRequest>();
        RenderSink::send(&mut tx, request(FocusKind::Circle));
        assert_eq!(rx.recv().unwrap().key, "tour");

        drop(rx);
        // Must not panic.
        RenderSink::send(&mut tx, request(FocusKind::Circle));
    }

    #[test]
    fn required_capabilities_is_union_of_steps() {
        assert!(request(FocusKind::Circle).required_capabilities().is_empty());
        assert_eq!(
            request(FocusKind::RoundedRectangle).required_capabilities(),
            Capabilities::ROUNDED_RECT
        );
    }
}
