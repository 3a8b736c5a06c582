use gloo_timers::callback::Timeout;
use web_sys::HtmlFormElement;
use yew::prelude::*;

use crate::constants::{CLEAR_FORM_ACTION, MODAL_TRANSITION_DELAY_MS};

pub enum ConfirmModalMsg {
    ScaleIn,
    Confirm,
}

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    pub visible: bool,
    pub on_close: Callback<MouseEvent>,
}

/// Confirmation overlay for clearing the measurement history.
///
/// The scale-in class is added a beat after the overlay becomes visible so
/// the CSS transition engages; closing removes it immediately and hides the
/// overlay through opacity/pointer-events, which keeps the shrink visible.
pub struct ConfirmModal {
    scaled_in: bool,
    scale_delay: Option<Timeout>,
    clear_form: NodeRef,
}

impl Component for ConfirmModal {
    type Message = ConfirmModalMsg;
    type Properties = ConfirmModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        // Mounted already-visible: schedule the scale-in just as a later
        // open would.
        let scale_delay = ctx.props().visible.then(|| {
            let link = ctx.link().clone();
            Timeout::new(MODAL_TRANSITION_DELAY_MS, move || {
                link.send_message(ConfirmModalMsg::ScaleIn);
            })
        });
        Self {
            scaled_in: false,
            scale_delay,
            clear_form: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let visible = ctx.props().visible;
        if visible && !old_props.visible {
            let link = ctx.link().clone();
            self.scale_delay = Some(Timeout::new(MODAL_TRANSITION_DELAY_MS, move || {
                link.send_message(ConfirmModalMsg::ScaleIn);
            }));
        } else if !visible && old_props.visible {
            self.scaled_in = false;
            self.scale_delay = None;
        }
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ConfirmModalMsg::ScaleIn => {
                self.scaled_in = true;
                true
            }
            ConfirmModalMsg::Confirm => {
                if let Some(form) = self.clear_form.cast::<HtmlFormElement>() {
                    form.submit().ok();
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let overlay_class = classes!(
            "modal-overlay",
            ctx.props().visible.then_some("visible")
        );
        let box_class = classes!("modal-box", self.scaled_in.then_some("scale-in"));

        html! {
            <div id="deleteModal" class={overlay_class} onclick={ctx.props().on_close.clone()}>
                <div id="modalContent" class={box_class} onclick={|e: MouseEvent| e.stop_propagation()}>
                    <h2>{ "Clear all results?" }</h2>
                    <p>{ "This permanently deletes every stored measurement." }</p>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" onclick={ctx.props().on_close.clone()}>
                            { "Cancel" }
                        </button>
                        <button type="button" class="btn-danger" onclick={ctx.link().callback(|_| ConfirmModalMsg::Confirm)}>
                            { "Clear history" }
                        </button>
                    </div>
                    <form
                        id="clearForm"
                        ref={self.clear_form.clone()}
                        method="post"
                        action={CLEAR_FORM_ACTION}
                        class="hidden"
                    ></form>
                </div>
            </div>
        }
    }
}
