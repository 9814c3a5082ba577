//! Pure view functions for the sign-in screen.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never
//! mutate state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use smartmenu_core::login::{FormState, Notice, Phase};

use crate::state::{AppState, Focus};
use crate::theme::Theme;

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 18;
const NOTICE_WIDTH: u16 = 44;
const NOTICE_HEIGHT: u16 = 7;

/// Spinner frames for the submit button.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

const MASK_CHAR: char = '•';
const CURSOR: &str = "▏";

const HINTS: &str = "Tab next · Enter select · Ctrl+T show password · Esc quit";

/// Renders the whole screen.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let [body, footer] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    render_card(app, frame, centered(body, CARD_WIDTH, CARD_HEIGHT));

    frame.render_widget(
        Paragraph::new(Span::styled(HINTS, app.theme.muted())).alignment(Alignment::Center),
        footer,
    );

    if let Some(notice) = app.notice() {
        render_notice(frame, notice, &app.theme, centered(area, NOTICE_WIDTH, NOTICE_HEIGHT));
    }
}

fn render_card(app: &AppState, frame: &mut Frame, area: Rect) {
    let theme = &app.theme;
    let form = app.form();

    let card = Block::bordered().border_style(Style::default().fg(theme.primary));
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let [
        brand,
        subtitle,
        _,
        email,
        password,
        toggle,
        error,
        button,
        _,
        forgot,
    ] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .horizontal_margin(2)
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(app.brand_name.as_str(), theme.brand()))
            .alignment(Alignment::Center),
        brand,
    );
    frame.render_widget(
        Paragraph::new(Span::styled("Sign in to continue", theme.muted()))
            .alignment(Alignment::Center),
        subtitle,
    );

    render_field(
        frame,
        email,
        " Email ",
        &form.email,
        app.focus == Focus::Email,
        theme,
    );
    render_field(
        frame,
        password,
        " Password ",
        &password_display(form),
        app.focus == Focus::Password,
        theme,
    );

    let checkbox = if form.show_password { "[x]" } else { "[ ]" };
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{checkbox} Show password"),
            theme.field_border(app.focus == Focus::ShowPassword),
        )),
        toggle,
    );

    if let Some(err) = &form.error {
        frame.render_widget(
            Paragraph::new(Span::styled(err.to_string(), theme.error()))
                .alignment(Alignment::Center),
            error,
        );
    }

    frame.render_widget(submit_button(app), button);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Forgot password?",
            theme.link(app.focus == Focus::ForgotPassword),
        ))
        .alignment(Alignment::Center),
        forgot,
    );
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    title: &'static str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let block = Block::bordered()
        .title(title)
        .border_style(theme.field_border(focused));
    let inner = block.inner(area);

    let mut spans = vec![Span::raw(visible_tail(
        value,
        inner.width.saturating_sub(1) as usize,
    ))];
    if focused {
        spans.push(Span::styled(CURSOR, Style::default().fg(theme.primary)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn submit_button(app: &AppState) -> Paragraph<'static> {
    let submitting = app.form().phase == Phase::Submitting;
    let label = if submitting {
        let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
        format!(" {spinner} Signing in… ")
    } else {
        " Sign in ".to_string()
    };
    Paragraph::new(Span::styled(
        label,
        app.theme.button(app.focus == Focus::Submit, !submitting),
    ))
    .alignment(Alignment::Center)
}

fn render_notice(frame: &mut Frame, notice: &Notice, theme: &Theme, area: Rect) {
    frame.render_widget(Clear, area);
    let block = Block::bordered()
        .title(format!(" {} ", notice.title))
        .style(theme.dialog());
    let lines = vec![
        Line::from(""),
        Line::from(notice.message),
        Line::from(""),
        Line::from(Span::styled("Enter to dismiss", theme.muted())),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Password as it should appear on screen.
fn password_display(form: &FormState) -> String {
    if form.show_password {
        form.password.clone()
    } else {
        MASK_CHAR.to_string().repeat(form.password.chars().count())
    }
}

/// Keeps the end of `text` so the cursor stays visible in narrow fields.
fn visible_tail(text: &str, width: usize) -> String {
    let len = text.chars().count();
    text.chars().skip(len.saturating_sub(width)).collect()
}

/// A `width` x `height` rect centered in `area`, clamped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use smartmenu_core::config::Config;

    use super::*;

    fn screen_text(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_brand_and_controls() {
        let app = AppState::new(&Config::default(), None);
        let text = screen_text(&app);
        assert!(text.contains("SmartMenu"));
        assert!(text.contains("Email"));
        assert!(text.contains("Sign in"));
        assert!(text.contains("Forgot password?"));
    }

    #[test]
    fn password_is_masked_until_shown() {
        let mut app = AppState::new(&Config::default(), None);
        app.session.set_password("hunter2");

        let masked = screen_text(&app);
        assert!(!masked.contains("hunter2"));
        assert!(masked.contains("•••••••"));

        app.session.toggle_show_password();
        assert!(screen_text(&app).contains("hunter2"));
    }

    #[test]
    fn renders_validation_message() {
        let mut app = AppState::new(&Config::default(), None);
        app.session.submit();
        assert!(screen_text(&app).contains("both fields required"));
    }

    #[test]
    fn renders_notice_dialog() {
        let mut app = AppState::new(&Config::default(), None);
        app.session.request_password_recovery();
        let text = screen_text(&app);
        assert!(text.contains("Password recovery"));
        assert!(text.contains("a recovery link has been sent"));
    }

    #[test]
    fn visible_tail_keeps_the_end() {
        assert_eq!(visible_tail("abcdef", 3), "def");
        assert_eq!(visible_tail("ab", 5), "ab");
    }

    #[test]
    fn centered_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered(area, 56, 18), area);
        assert_eq!(centered(area, 10, 4), Rect::new(5, 3, 10, 4));
    }
}
