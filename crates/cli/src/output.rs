// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering command responses

use std::io::{self, Write};

use ipx_core::{Command, CommandError, Output, Payload, Response};

/// Write `response` to `out` with the command's text encoder, or as
/// pretty-printed JSON when the command has none.
pub async fn render<W: Write>(
    command: &Command,
    response: Response,
    out: &mut W,
) -> Result<(), CommandError> {
    if let Some(encode) = command.encoder() {
        let mut reader = encode(response).await?;
        io::copy(&mut reader, out)?;
        return Ok(());
    }

    match response.into_output() {
        Output::Value(payload) => print_json(&payload, out),
        Output::Stream(mut rx) => {
            while let Some(payload) = rx.recv().await {
                print_json(&payload, out)?;
            }
            Ok(())
        }
        Output::Empty => Ok(()),
    }
}

fn print_json<W: Write>(payload: &Payload, out: &mut W) -> Result<(), CommandError> {
    let value = payload.to_json().ok_or_else(|| {
        CommandError::Failed(format!("cannot render {} as JSON", payload.type_name()))
    })?;
    serde_json::to_writer_pretty(&mut *out, &value).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipx_core::{message_text_encoder, CommandKind, MessageOutput};
    use tokio::sync::mpsc;

    fn plain() -> Command {
        Command::namespace(CommandKind::Legacy, "No encoder")
    }

    async fn rendered(command: &Command, response: Response) -> String {
        let mut out = Vec::new();
        render(command, response, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn encoder_output_is_written_verbatim() {
        let command = plain().text_encoder(message_text_encoder);
        let text = rendered(&command, Response::value(MessageOutput::new("pong"))).await;
        assert_eq!(text, "pong");
    }

    #[tokio::test]
    async fn encoder_shape_mismatch_fails() {
        let command = plain().text_encoder(message_text_encoder);
        let mut out = Vec::new();
        let err = render(&command, Response::value(42u32), &mut out)
            .await
            .unwrap_err();
        assert!(matches!(err, CommandError::Response(_)));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn values_without_encoder_are_json() {
        let text = rendered(&plain(), Response::value(MessageOutput::new("hi"))).await;
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["Message"], "hi");
    }

    #[tokio::test]
    async fn streams_print_every_item() {
        let (tx, rx) = mpsc::channel(4);
        tx.send(Payload::new(1u32)).await.unwrap();
        tx.send(Payload::new(2u32)).await.unwrap();
        drop(tx);

        let text = rendered(&plain(), Response::stream(rx)).await;
        assert_eq!(text, "1\n2\n");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn encoder_awaits_stream_from_spawned_task() {
        let command = plain().text_encoder(message_text_encoder);
        let (tx, rx) = mpsc::channel(1);
        tokio::spawn(async move {
            tx.send(Payload::new(MessageOutput::new("pong"))).await.unwrap();
        });

        let text = rendered(&command, Response::stream(rx)).await;
        assert_eq!(text, "pong");
    }

    #[tokio::test]
    async fn empty_response_prints_nothing() {
        assert_eq!(rendered(&plain(), Response::empty()).await, "");
    }
}
