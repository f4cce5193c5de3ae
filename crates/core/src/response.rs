// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handler responses and the text-encoder unwrapping contract.
//!
//! A handler returns an opaque [`Response`]. Text encoders never look inside
//! it directly; they go through two steps:
//!
//! 1. [`unwrap_output`] extracts the single [`Payload`], awaiting the first
//!    item when the handler streamed its output.
//! 2. [`Payload::downcast`] checks the payload is exactly the concrete type
//!    the encoder was written for, failing with
//!    [`ResponseError::PayloadShapeMismatch`] otherwise.
//!
//! [`unwrap_as`] bundles both steps and is what encoders should call.

use std::any::Any;
use std::future::Future;
use std::io::{Cursor, Read};
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors raised while rendering a response
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResponseError {
    #[error("payload shape mismatch: expected {expected}, got {actual}")]
    PayloadShapeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    #[error("response carried no output")]
    NoOutput,
    #[error("output stream closed before producing a value")]
    EmptyStream,
}

/// A type-erased handler result.
pub struct Payload {
    value: Box<dyn Any + Send>,
    type_name: &'static str,
    to_json: fn(&(dyn Any + Send)) -> Option<serde_json::Value>,
}

fn json_of<T: Serialize + 'static>(value: &(dyn Any + Send)) -> Option<serde_json::Value> {
    value
        .downcast_ref::<T>()
        .and_then(|v| serde_json::to_value(v).ok())
}

impl Payload {
    pub fn new<T: Serialize + Send + 'static>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: std::any::type_name::<T>(),
            to_json: json_of::<T>,
        }
    }

    /// Name of the concrete type carried
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Take the value out as `T`, or fail naming both shapes.
    pub fn downcast<T: 'static>(self) -> Result<T, ResponseError> {
        let actual = self.type_name;
        self.value
            .downcast::<T>()
            .map(|v| *v)
            .map_err(|_| ResponseError::PayloadShapeMismatch {
                expected: std::any::type_name::<T>(),
                actual,
            })
    }

    /// JSON projection of the payload, for callers without a text encoder
    pub fn to_json(&self) -> Option<serde_json::Value> {
        (self.to_json)(self.value.as_ref())
    }
}

impl std::fmt::Debug for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Payload")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// What a handler produced
#[derive(Debug)]
pub enum Output {
    /// A single value
    Value(Payload),
    /// Values delivered over a channel; text encoders read the first one
    Stream(mpsc::Receiver<Payload>),
    /// Nothing to render
    Empty,
}

/// Opaque result of one command invocation
#[derive(Debug)]
pub struct Response {
    output: Output,
}

impl Response {
    pub fn new(output: Output) -> Self {
        Self { output }
    }

    /// Response carrying a single value
    pub fn value<T: Serialize + Send + 'static>(value: T) -> Self {
        Self::new(Output::Value(Payload::new(value)))
    }

    /// Response whose values arrive on `rx`
    pub fn stream(rx: mpsc::Receiver<Payload>) -> Self {
        Self::new(Output::Stream(rx))
    }

    pub fn empty() -> Self {
        Self::new(Output::Empty)
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn into_output(self) -> Output {
        self.output
    }
}

/// Extract the payload from a response without interpreting it.
pub async fn unwrap_output(response: Response) -> Result<Payload, ResponseError> {
    match response.output {
        Output::Value(payload) => Ok(payload),
        Output::Stream(mut rx) => rx.recv().await.ok_or(ResponseError::EmptyStream),
        Output::Empty => Err(ResponseError::NoOutput),
    }
}

/// Unwrap a response and check its payload is a `T`.
pub async fn unwrap_as<T: 'static>(response: Response) -> Result<T, ResponseError> {
    unwrap_output(response).await?.downcast::<T>()
}

/// Text produced by an encoder
pub type Encoded = Result<Box<dyn Read + Send>, ResponseError>;

/// Pending result of a [`TextEncoder`]
pub type Encoding = Pin<Box<dyn Future<Output = Encoded> + Send>>;

/// Renders a command's response as text.
///
/// Every encoder must check the payload shape via [`unwrap_as`] (or
/// [`Payload::downcast`]) before rendering.
pub type TextEncoder = fn(Response) -> Encoding;

/// Single-field message payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageOutput {
    #[serde(rename = "Message")]
    pub message: String,
}

impl MessageOutput {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Text encoder for commands answering with a [`MessageOutput`]
pub fn message_text_encoder(response: Response) -> Encoding {
    Box::pin(async move {
        let out: MessageOutput = unwrap_as(response).await?;
        let text: Box<dyn Read + Send> = Box::new(Cursor::new(out.message.into_bytes()));
        Ok(text)
    })
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
