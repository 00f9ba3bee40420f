use crate::constants::CONTACT_STATUS_ID;
use crate::dom;
use folio_core::constants::CONTACT_RESET_MS;
use folio_core::{ContactForm, EmailConfig, EmailRequest, Field, FolioError, FormStatus};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    /// EmailJS browser SDK, loaded by the page.
    #[wasm_bindgen(js_namespace = emailjs, js_name = send, catch)]
    fn emailjs_send(
        service_id: &str,
        template_id: &str,
        params: &JsValue,
        public_key: &str,
    ) -> Result<js_sys::Promise, JsValue>;
}

async fn send(request: &EmailRequest) -> anyhow::Result<()> {
    let json = serde_json::to_string(&request.params)?;
    let params = js_sys::JSON::parse(&json).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let promise = emailjs_send(
        &request.service_id,
        &request.template_id,
        &params,
        &request.public_key,
    )
    .map_err(|e| anyhow::anyhow!("emailjs unavailable: {:?}", e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

fn field_value(el: &web::Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<web::HtmlTextAreaElement>().map(|t| t.value())
}

/// Form DOM plus the state machine behind it.
struct Ui {
    form: web::HtmlFormElement,
    button: Option<web::HtmlButtonElement>,
    status: Option<web::Element>,
    state: RefCell<ContactForm>,
    reset: RefCell<Option<Timeout>>,
}

impl Ui {
    fn read_fields(&self) {
        let mut state = self.state.borrow_mut();
        for el in dom::query_all::<web::Element>(&self.form, "[name]") {
            let Some(field) = el.get_attribute("name").as_deref().and_then(Field::from_name)
            else {
                continue;
            };
            if let Some(value) = field_value(&el) {
                state.set_field(field, value);
            }
        }
    }

    fn render(&self, note: Option<&str>) {
        let state = self.state.borrow();
        let status = state.status();
        _ = self.form.set_attribute("data-status", status.as_str());
        if let Some(button) = &self.button {
            button.set_text_content(Some(state.status_label()));
            button.set_disabled(status == FormStatus::Sending);
        }
        if let Some(el) = &self.status {
            let text = match (status, note) {
                (_, Some(note)) => note,
                (FormStatus::Success, _) => "Thanks! I'll get back to you soon.",
                (FormStatus::Error, _) => "Something went wrong. Please try again.",
                _ => "",
            };
            el.set_text_content(Some(text));
        }
    }

    fn finish(self: &Rc<Self>, outcome: anyhow::Result<()>) {
        self.state.borrow_mut().complete(outcome.map_err(|e| format!("{e:#}")));
        if self.state.borrow().status() == FormStatus::Success {
            self.form.reset();
            log::info!("[contact] message sent");
        }
        self.render(None);

        let ui = self.clone();
        *self.reset.borrow_mut() = Some(Timeout::new(CONTACT_RESET_MS, move || {
            ui.state.borrow_mut().reset();
            ui.render(None);
        }));
    }
}

/// The contact form, wired to the email relay.
pub struct Contact {
    ui: Rc<Ui>,
    _submit: EventListener,
}

impl Drop for Contact {
    fn drop(&mut self) {
        self.ui.reset.borrow_mut().take();
    }
}

impl Contact {
    pub fn mount(form: web::HtmlFormElement, document: &web::Document) -> anyhow::Result<Self> {
        let config = EmailConfig::from_env();
        if config.is_placeholder() {
            log::warn!("[contact] EmailJS credentials not configured; sending will fail");
        }

        let ui = Rc::new(Ui {
            button: dom::query_all::<web::HtmlButtonElement>(&form, "button[type='submit']")
                .into_iter()
                .next(),
            status: document.get_element_by_id(CONTACT_STATUS_ID),
            form,
            state: RefCell::new(ContactForm::new(config)),
            reset: RefCell::new(None),
        });
        ui.render(None);

        let submit = {
            let ui = ui.clone();
            let form = ui.form.clone();
            EventListener::new_with_options(
                &form,
                "submit",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    ui.read_fields();
                    let submitted = ui.state.borrow_mut().submit();
                    match submitted {
                        Ok(request) => {
                            ui.render(None);
                            let ui = ui.clone();
                            spawn_local(async move {
                                let outcome = send(&request).await;
                                ui.finish(outcome);
                            });
                        }
                        Err(FolioError::NotIdle) => {}
                        Err(e) => {
                            log::warn!("[contact] rejected: {e}");
                            ui.render(Some(&e.to_string()));
                        }
                    }
                },
            )
        };

        log::info!("[contact] ready");
        Ok(Self {
            ui,
            _submit: submit,
        })
    }
}
