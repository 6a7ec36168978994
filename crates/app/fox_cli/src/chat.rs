use fox_api_client::{ChatClient, Conversation, StatusView};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::Result;

const QUIT: &str = "/quit";

/// Reads user turns from stdin until EOF or `/quit`.
///
/// Submissions are sequential; a failed request is reported inline and the
/// session continues.
pub async fn repl(server: &str, model: &str) -> Result<()> {
    let client = ChatClient::new(server)?;

    let view = StatusView::from_result(client.status().await);
    println!("{}", view.banner.unwrap_or(view.indicator.as_str()));

    let mut conversation = Conversation::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"you> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim() == QUIT {
            break;
        }

        match conversation.submit(&client, &line, model).await {
            Ok(Some(reply)) => println!("assistant: {}", reply.display_text()),
            Ok(None) => {}
            Err(e) => {
                log::warn!("chat request failed: {e}");
                println!("assistant: Request failed: {e}");
            }
        }
    }

    log::debug!("session ended after {} turns", conversation.messages().len());
    Ok(())
}
