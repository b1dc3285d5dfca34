use crate::ui::announcement::{announcement_bar, dismiss_button};
use crate::ui::app::{App, ChromeControl, FocusTarget};
use crate::ui::carousel::{render_carousel, CarouselFrame};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use ratatui::widgets::Clear;
use ratatui::Frame;
use tokio::time::Instant;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let layout = app.layout_for(frame.area());
    let snapshot = app.snapshot();
    let focused = app.focused();
    let now = Instant::now();

    if let Some(bar) = layout.announcement {
        frame.render_widget(announcement_bar(), bar);
    }
    if let Some(button) = layout.dismiss_button {
        let focused =
            focused == Some(FocusTarget::Chrome(ChromeControl::DismissAnnouncement));
        frame.render_widget(dismiss_button(focused), button);
    }

    let header = Header::new();
    frame.render_widget(header.widget(), layout.header);
    frame.render_widget(
        header.menu_button(
            snapshot.mobile_menu_open,
            focused == Some(FocusTarget::Chrome(ChromeControl::MenuToggle)),
        ),
        layout.menu_button,
    );

    frame.render_widget(Clear, layout.body);
    let view = CarouselFrame {
        state: app.carousel(),
        progress: app.progress_at(now),
        settling: app.is_settling(now),
    };
    render_carousel(frame, &layout.carousel, &view);

    if let Some(menu) = layout.menu {
        frame.render_widget(Clear, menu);
        frame.render_widget(header.menu(), menu);
    }

    frame.render_widget(Footer::new().widget(snapshot.reduced_motion), layout.footer);
}
