use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::command::{Action, USAGE};
use crate::render::TextRenderer;
use crate::view::ListingView;

macro_rules! send {
    ($out:expr, $text:expr) => {
        if let Err(e) = $out.write_all($text.as_bytes()).await {
            tracing::error!("fail to write output: {e}");
            return Err(e.into());
        }
    };
}

/// Run the interactive loop until `quit` or end of input.
///
/// Each line is applied to the view and the listing re-rendered before the next line is read.
pub async fn run<R, W>(
    view: &mut ListingView,
    renderer: &TextRenderer,
    input: R,
    mut output: W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    send!(output, renderer.listing(view));
    send!(output, "> ");
    output.flush().await?;

    let mut lines = input.split(b'\n');
    while let Some(mut bytes) = lines.next_segment().await? {
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        let Ok(line) = String::from_utf8(bytes) else {
            tracing::warn!("skipping a line that is not valid UTF-8");
            send!(output, format!("line is not valid UTF-8\n\n{USAGE}\n> "));
            output.flush().await?;
            continue;
        };

        let action = match Action::new(&line) {
            Ok(action) => action.resolve(view.facets()),
            Err(hint) => {
                send!(output, format!("{hint}\n\n{USAGE}\n> "));
                output.flush().await?;
                continue;
            }
        };

        match action {
            Action::Apply(event) => {
                view.apply(event);
                send!(output, renderer.listing(view));
            }
            Action::List => send!(output, renderer.listing(view)),
            Action::Facets => send!(output, renderer.facets(view.facets())),
            Action::Help => send!(output, format!("{USAGE}\n")),
            Action::Quit => break,
        }
        send!(output, "> ");
        output.flush().await?;
    }

    output.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_restaurants;
    use crate::filter::FilterState;

    async fn drive(script: &str, view: &mut ListingView) -> String {
        drive_bytes(script.as_bytes(), view).await
    }

    async fn drive_bytes(script: &[u8], view: &mut ListingView) -> String {
        let mut out = Vec::new();
        run(view, &TextRenderer::default(), script, &mut out)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn events_apply_in_order() {
        let mut view = ListingView::new(sample_restaurants());
        let out = drive("rating 4.5\ncuisine moroc\n", &mut view).await;

        assert!(out.contains("Found 5 restaurants"));
        assert!(out.contains("Found 3 restaurants"));
        assert!(out.ends_with("Found 1 restaurants\n\nDar Rbatia  [$$$]\n  4.5 ★★★★☆\n  <Moroccan>\n  Luxurious Moroccan dining with traditional entertainment and royal ambiance\n\n> "));
        assert_eq!(view.filters().cuisine.as_str(), "Moroccan");
    }

    #[tokio::test]
    async fn bad_line_keeps_state() {
        let mut view = ListingView::new(sample_restaurants());
        let out = drive("rating lots\n", &mut view).await;
        assert!(out.contains("Can not parse your argument into number\n\nUsage:"));
        assert_eq!(*view.filters(), FilterState::default());
    }

    #[tokio::test]
    async fn quit_stops_reading() {
        let mut view = ListingView::new(sample_restaurants());
        drive("search dar\nquit\nsearch boho\n", &mut view).await;
        assert_eq!(view.query().as_str(), "dar");
        assert_eq!(view.count(), 2);
    }

    #[tokio::test]
    async fn unknown_cuisine_empties_listing() {
        let mut view = ListingView::new(sample_restaurants());
        let out = drive("cuisine Sushi\nclear\n", &mut view).await;
        assert!(out.contains("Found 0 restaurants"));
        assert_eq!(view.count(), 5);
    }

    #[tokio::test]
    async fn price_token_is_taken_verbatim() {
        let mut view = ListingView::new(sample_restaurants());
        let out = drive("price $\n", &mut view).await;
        assert!(out.contains("Found 0 restaurants"));
        assert_eq!(view.filters().price_range.as_str(), "$");
    }

    #[tokio::test]
    async fn invalid_utf8_line_is_skipped() {
        let mut view = ListingView::new(sample_restaurants());
        let out = drive_bytes(b"cuisine \xff\xfe\r\nrating 4.5\r\n", &mut view).await;
        assert!(out.contains("line is not valid UTF-8\n\nUsage:"));
        assert_eq!(view.filters().min_rating, 4.5);
        assert_eq!(view.count(), 3);
    }
}
