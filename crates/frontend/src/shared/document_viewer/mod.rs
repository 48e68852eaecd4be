mod state;

use crate::shared::icons::icon;
use crate::shared::markdown::MarkdownViewer;
use contracts::domain::a002_document::DocumentViewModel;
use leptos::prelude::*;
use state::DocumentPreview;
use thaw::*;

/// Просмотр документа в модальном окне.
///
/// Открывается по клику на `trigger` (или на кнопку "View Content" по умолчанию),
/// закрывается кнопкой, кликом вне окна или клавишей Escape.
/// Содержимое принадлежит вызывающей стороне и не изменяется.
#[component]
pub fn DocumentViewer(
    #[prop(into)] title: String,
    #[prop(into)] content: String,
    /// Custom trigger element
    #[prop(optional)]
    trigger: Option<ChildrenFn>,
) -> impl IntoView {
    let preview = RwSignal::new(DocumentPreview::new(DocumentViewModel::new(title, content)));
    // Dialog сам сбрасывает флаг по Escape и клику вне окна
    let open = RwSignal::new(false);
    Effect::new(move |_| {
        let is_open = open.get();
        preview.update(|p| p.set_open(is_open));
    });

    let trigger_view = match trigger {
        Some(children) => view! {
            <span class="document-viewer__trigger" on:click=move |_| open.set(true)>
                {children()}
            </span>
        }
        .into_any(),
        None => view! {
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                on_click=move |_| open.set(true)
            >
                {icon("file-text")}
                " View Content"
            </Button>
        }
        .into_any(),
    };

    view! {
        {trigger_view}
        <Dialog open=open>
            <DialogSurface attr:style="max-width: 56rem; max-height: 80vh; overflow-y: auto;">
                <DialogBody>
                    <DialogTitle>{move || preview.with(|p| p.document().title.clone())}</DialogTitle>
                    <DialogContent>
                        <div style="margin-top: 16px;">
                            <MarkdownViewer content=Signal::derive(move || {
                                preview.with(|p| p.visible().map(|d| d.content.clone()).unwrap_or_default())
                            }) />
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| open.set(false)
                        >
                            {icon("x")}
                            " Close"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
