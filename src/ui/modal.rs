//! Login and register modal dialogs.
//!
//! Rendered over a dimmed backdrop via the dialog frame component. The
//! dialog rect is recorded on the app so the mouse handler can treat
//! clicks outside it as backdrop dismissal.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::forms::{LoginField, RegisterField};
use crate::overlay::OverlayKind;
use crate::ui::components::{
    render_dialog_frame, render_input_field, DialogFrameConfig, InputFieldConfig,
    INPUT_FIELD_HEIGHT,
};

/// Render the topmost overlay, if any, and record its hit area.
pub fn render_modal(frame: &mut Frame, area: Rect, app: &mut App) {
    let Some(top) = app.overlays.top() else {
        app.modal_area = None;
        return;
    };
    let dialog_area = match top {
        OverlayKind::Login => render_login(frame, area, app),
        OverlayKind::Register => render_register(frame, area, app),
    };
    app.modal_area = Some(dialog_area);
}

fn render_login(frame: &mut Frame, area: Rect, app: &App) -> Rect {
    let palette = app.theme.palette();
    // Two fields plus the switch hint row.
    let config = DialogFrameConfig::new("Sign In", 2 * INPUT_FIELD_HEIGHT + 1);
    let (dialog_area, inner) = render_dialog_frame(frame, area, palette, &config);

    let form = &app.login_form;
    let mut y = inner.y;
    let field_rect = |y: u16| Rect {
        x: inner.x,
        y,
        width: inner.width,
        height: INPUT_FIELD_HEIGHT,
    };

    let fields: [(&str, &String, LoginField, bool); 2] = [
        ("Username", &form.username, LoginField::Username, false),
        ("Password", &form.password, LoginField::Password, !form.show_password),
    ];
    for (label, value, field, masked) in fields {
        // Short terminals truncate the form rather than overflow it.
        if y + INPUT_FIELD_HEIGHT > inner.y + inner.height {
            return dialog_area;
        }
        render_input_field(
            frame,
            field_rect(y),
            palette,
            &InputFieldConfig::new(label, value)
                .focused(form.focus == field)
                .masked(masked),
        );
        y += INPUT_FIELD_HEIGHT;
    }

    if y >= inner.y + inner.height {
        return dialog_area;
    }
    let hint = Paragraph::new(Line::from(Span::styled(
        "No account yet? Press ^O to register",
        Style::default().fg(palette.dim),
    )));
    frame.render_widget(
        hint,
        Rect {
            x: inner.x + 1,
            y,
            width: inner.width.saturating_sub(2),
            height: 1,
        },
    );

    dialog_area
}

fn render_register(frame: &mut Frame, area: Rect, app: &App) -> Rect {
    let palette = app.theme.palette();
    // Four fields, the terms checkbox row, and the switch hint row.
    let config = DialogFrameConfig::new("Create Account", 4 * INPUT_FIELD_HEIGHT + 2);
    let (dialog_area, inner) = render_dialog_frame(frame, area, palette, &config);

    let form = &app.register_form;
    let mut y = inner.y;
    let field_rect = |y: u16| Rect {
        x: inner.x,
        y,
        width: inner.width,
        height: INPUT_FIELD_HEIGHT,
    };

    let fields: [(&str, &String, RegisterField, bool); 4] = [
        ("Username", &form.username, RegisterField::Username, false),
        ("Email", &form.email, RegisterField::Email, false),
        ("Password", &form.password, RegisterField::Password, !form.show_password),
        ("Confirm Password", &form.confirm, RegisterField::Confirm, !form.show_password),
    ];
    for (label, value, field, masked) in fields {
        // Short terminals truncate the form rather than overflow it.
        if y + INPUT_FIELD_HEIGHT > inner.y + inner.height {
            return dialog_area;
        }
        render_input_field(
            frame,
            field_rect(y),
            palette,
            &InputFieldConfig::new(label, value)
                .focused(form.focus == field)
                .masked(masked),
        );
        y += INPUT_FIELD_HEIGHT;
    }

    if y >= inner.y + inner.height {
        return dialog_area;
    }

    let checkbox = if form.agree_terms { "[x]" } else { "[ ]" };
    let checkbox_style = if form.focus == RegisterField::Terms {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.dim)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{checkbox} I agree to the Terms of Service"),
            checkbox_style,
        ))),
        Rect {
            x: inner.x + 1,
            y,
            width: inner.width.saturating_sub(2),
            height: 1,
        },
    );
    y += 1;

    if y >= inner.y + inner.height {
        return dialog_area;
    }
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Already a member? Press ^O to sign in",
            Style::default().fg(palette.dim),
        ))),
        Rect {
            x: inner.x + 1,
            y,
            width: inner.width.saturating_sub(2),
            height: 1,
        },
    );

    dialog_area
}
