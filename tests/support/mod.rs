#![allow(dead_code)]

//! Minimal stand-in for the chat-completion endpoint.
//! Serves one canned HTTP response per server and hands
//! back the raw request it received.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

pub struct FakeProvider
{   addr: SocketAddr
  , request_rx: oneshot::Receiver<String>
}

impl FakeProvider
{   /// Base URL to put in `ClientConfig::api_base`
    pub fn api_base(&self) -> String
    {   format!("http://{}/openai/v1", self.addr)
    }

    /// The raw request if one arrives within `wait`
    pub async fn received_within(self, wait: Duration) -> Option<String>
    {   tokio::time::timeout(wait, self.request_rx)
          .await
          .ok()
          .and_then(|r| r.ok())
    }

    /// The raw request (head and body) the server received
    pub async fn received(self) -> String
    {   tokio::time::timeout(Duration::from_secs(5), self.request_rx)
          .await
          .expect("fake provider saw no request")
          .expect("fake provider dropped the request")
    }
}

/// Answer the first request with `status` and `body`
pub async fn respond_with(status: u16, body: &str) -> FakeProvider
{   let body = body.to_string();
    serve(move |mut stream| async move {
      let response = format!(
        "HTTP/1.1 {} Canned\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n\
         {}",
        status, body.len(), body
      );
      let _ = stream.write_all(response.as_bytes()).await;
      let _ = stream.shutdown().await;
    }).await
}

/// Read the request, then never answer
pub async fn never_respond() -> FakeProvider
{   serve(|stream| async move {
      tokio::time::sleep(Duration::from_secs(30)).await;
      drop(stream);
    }).await
}

/// An address with nothing listening on it
pub async fn closed_port() -> String
{   let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/openai/v1", addr)
}

async fn serve<F, Fut>(reply: F) -> FakeProvider
where
  F: FnOnce(TcpStream) -> Fut + Send + 'static,
  Fut: std::future::Future<Output = ()> + Send + 'static,
{   let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (request_tx, request_rx) = oneshot::channel();

    tokio::spawn(async move {
      let (mut stream, _) = match listener.accept().await
      {   Ok(conn) => conn
        , Err(_) => return
      };
      let request = read_request(&mut stream).await;
      let _ = request_tx.send(request);
      reply(stream).await;
    });

    FakeProvider { addr, request_rx }
}

async fn read_request(stream: &mut TcpStream) -> String
{   let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop
    {   let n = match stream.read(&mut chunk).await
        {   Ok(0) | Err(_) => break
          , Ok(n) => n
        };
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(head_end) = text.find("\r\n\r\n")
        {   let wanted = content_length(&text[..head_end]);
            if buf.len() >= head_end + 4 + wanted
            {   break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn content_length(head: &str) -> usize
{   head.lines()
      .filter_map(|line| line.split_once(':'))
      .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
      .and_then(|(_, value)| value.trim().parse().ok())
      .unwrap_or(0)
}

/// Split a raw request into (head, body)
pub fn split_request(raw: &str) -> (&str, &str)
{   raw.split_once("\r\n\r\n").unwrap_or((raw, ""))
}

/// A successful chat-completion body carrying `content`
pub fn completion_body(content: &str) -> String
{   serde_json::json!({
      "id": "chatcmpl-test",
      "object": "chat.completion",
      "model": "llama-3.3-70b-versatile",
      "choices": [{
        "index": 0,
        "message": { "role": "assistant", "content": content },
        "finish_reason": "stop"
      }]
    }).to_string()
}
