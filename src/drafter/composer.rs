//! Response composer — picks a reply template and fills it in.
//!
//! Selection is a pure decision on `(Category, IntentFlags)`:
//! category first, then complaint → request → question within a category.
//! Templates live in static per-locale tables; clause text is spliced into
//! `{placeholder}` slots.

use super::types::{Category, GeneratedReply, IntentFlags, Locale};

/// Prefix every reply subject starts with.
pub const REPLY_PREFIX: &str = "Re: ";

/// Which template a reply uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Urgent email, any intent.
    Urgent,
    /// Professional email containing a complaint.
    Complaint,
    /// Professional email containing a request (no complaint).
    Request,
    /// Professional email, neither complaint nor request.
    Acknowledgment,
    /// Personal email asking a question.
    PersonalQuestion,
    /// Personal email, no question.
    PersonalNote,
}

impl TemplateKind {
    /// Pick the template for a classified email. Every combination is covered.
    pub fn select(category: Category, intent: IntentFlags) -> Self {
        match category {
            Category::Urgent => Self::Urgent,
            Category::Professional if intent.is_complaint => Self::Complaint,
            Category::Professional if intent.is_request => Self::Request,
            Category::Professional => Self::Acknowledgment,
            Category::Personal if intent.is_question => Self::PersonalQuestion,
            Category::Personal => Self::PersonalNote,
        }
    }
}

/// Fixed text for one template.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub tone: &'static str,
    pub remarks: &'static str,
    pub body: &'static str,
}

/// Optional sentences spliced into template bodies.
#[derive(Debug, Clone, Copy)]
pub struct Clauses {
    /// Urgent, `{question}` slot.
    pub urgent_question: &'static str,
    /// Urgent, `{request}` slot.
    pub urgent_request: &'static str,
    /// Request, `{question}` slot.
    pub request_question: &'static str,
    /// Acknowledgment, `{closing}` slot when a question was asked.
    pub ack_question: &'static str,
    /// Acknowledgment, `{closing}` slot otherwise.
    pub ack_statement: &'static str,
    /// Personal question, `{opening}` slot when a request was made.
    pub personal_request: &'static str,
    /// Personal question, `{opening}` slot otherwise.
    pub personal_question: &'static str,
}

/// All reply text for one locale.
#[derive(Debug, Clone, Copy)]
pub struct TemplateTable {
    /// Subject placeholder when the email had none.
    pub no_subject: &'static str,
    /// Stands in for the subject inside a request reply.
    pub this_matter: &'static str,
    /// Sender placeholder for history entries.
    pub unknown_sender: &'static str,
    pub urgent: Template,
    pub complaint: Template,
    pub request: Template,
    pub acknowledgment: Template,
    pub personal_question: Template,
    pub personal_note: Template,
    pub clauses: Clauses,
}

impl TemplateTable {
    /// Built-in table for a locale.
    pub fn for_locale(locale: Locale) -> &'static TemplateTable {
        match locale {
            Locale::En => &ENGLISH_TEMPLATES,
            Locale::Fr => &FRENCH_TEMPLATES,
        }
    }

    /// Template for a given kind.
    pub fn template(&self, kind: TemplateKind) -> &Template {
        match kind {
            TemplateKind::Urgent => &self.urgent,
            TemplateKind::Complaint => &self.complaint,
            TemplateKind::Request => &self.request,
            TemplateKind::Acknowledgment => &self.acknowledgment,
            TemplateKind::PersonalQuestion => &self.personal_question,
            TemplateKind::PersonalNote => &self.personal_note,
        }
    }

    /// "Re: " + subject, or "Re: " + placeholder for a blank subject.
    pub fn reply_subject(&self, subject: &str) -> String {
        if subject.trim().is_empty() {
            format!("{REPLY_PREFIX}{}", self.no_subject)
        } else {
            format!("{REPLY_PREFIX}{subject}")
        }
    }

    /// Build the reply. Total over every category/intent combination.
    pub fn compose(&self, category: Category, intent: IntentFlags, subject: &str) -> GeneratedReply {
        let kind = TemplateKind::select(category, intent);
        let template = self.template(kind);
        let c = &self.clauses;
        let pick = |cond: bool, text: &'static str| if cond { text } else { "" };

        let body = match kind {
            TemplateKind::Urgent => template
                .body
                .replace("{question}", pick(intent.is_question, c.urgent_question))
                .replace("{request}", pick(intent.is_request, c.urgent_request)),
            TemplateKind::Request => {
                let topic = if subject.trim().is_empty() {
                    self.this_matter
                } else {
                    subject
                };
                // Subject goes in last so its text is never treated as a slot.
                template
                    .body
                    .replace("{question}", pick(intent.is_question, c.request_question))
                    .replace("{subject}", topic)
            }
            TemplateKind::Acknowledgment => {
                let closing = if intent.is_question {
                    c.ack_question
                } else {
                    c.ack_statement
                };
                template.body.replace("{closing}", closing)
            }
            TemplateKind::PersonalQuestion => {
                let opening = if intent.is_request {
                    c.personal_request
                } else {
                    c.personal_question
                };
                template.body.replace("{opening}", opening)
            }
            TemplateKind::Complaint | TemplateKind::PersonalNote => template.body.to_string(),
        };

        GeneratedReply {
            subject: self.reply_subject(subject),
            body,
            tone: template.tone.to_string(),
            remarks: template.remarks.to_string(),
            category,
        }
    }
}

pub static ENGLISH_TEMPLATES: TemplateTable = TemplateTable {
    no_subject: "(no subject)",
    this_matter: "this matter",
    unknown_sender: "Unknown sender",
    urgent: Template {
        tone: "responsive and efficient",
        remarks: "⚠️ Email flagged as urgent: prioritize this reply. Check whether immediate action is needed.",
        body: "Hello,

Thank you for your message. I have noted the urgency of your request.

{question}{request}I will get back to you as soon as possible with a detailed answer.

In the meantime, feel free to contact me if you need any further information.

Best regards,
[Your name]",
    },
    complaint: Template {
        tone: "empathetic and professional",
        remarks: "💼 Professional email with a complaint: an empathetic tone is recommended. Propose a concrete solution if possible.",
        body: "Hello,

Thank you for taking the time to contact me.

I understand your concern and I am sorry for the inconvenience you have experienced. Your feedback is valuable and helps me improve my services.

I will look into the situation in detail and come back to you with a suitable solution as soon as possible.

I remain available for any further information.

Best regards,
[Your name]",
    },
    request: Template {
        tone: "professional",
        remarks: "💼 Professional email with a request. Personalize the response deadline and add specific details if needed.",
        body: "Hello,

Thank you for your message.

I have noted your request regarding {subject}. I will review it carefully and get back to you with the necessary information.

{question}I will send you a complete answer by [specify deadline].

I remain at your disposal,

Kind regards,
[Your name]",
    },
    acknowledgment: Template {
        tone: "professional",
        remarks: "💼 Standard professional email. Adapt the content to the specific context of the exchange.",
        body: "Hello,

Thank you for your message.

I have read your email and the information you sent me.

{closing}

Do not hesitate to contact me again if you have any further questions.

Best regards,
[Your name]",
    },
    personal_question: Template {
        tone: "warm and friendly",
        remarks: "👤 Personal email with a question. You can use a more relaxed, personal tone.",
        body: "Hi,

Thanks so much for your message!

{opening}I'll get back to you with more details very soon.

Let me know if you have any other questions!

Cheers,
[Your first name]",
    },
    personal_note: Template {
        tone: "warm and friendly",
        remarks: "👤 Personal email. Feel free to adapt the tone to your relationship with the sender.",
        body: "Hi,

Thanks for your message, it's great to hear from you!

Thanks for letting me know. I've made a note of it and will get back to you very soon.

Talk soon!

Cheers,
[Your first name]",
    },
    clauses: Clauses {
        urgent_question: "Regarding your question, ",
        urgent_request: "I will handle your request as a priority and ",
        request_question: "To answer your question, I need to gather a few details. ",
        ack_question: "Regarding your question, I will send you a detailed answer shortly.",
        ack_statement: "I will get back to you soon with a complete response.",
        personal_request: "Of course, I'll gladly take a look. ",
        personal_question: "About your question, ",
    },
};

pub static FRENCH_TEMPLATES: TemplateTable = TemplateTable {
    no_subject: "Sans objet",
    this_matter: "ce sujet",
    unknown_sender: "Expéditeur inconnu",
    urgent: Template {
        tone: "réactif et efficace",
        remarks: "⚠️ Email marqué comme urgent - réponse priorisée. Vérifiez si des actions immédiates sont nécessaires.",
        body: "Bonjour,

Je vous remercie pour votre message. J'ai bien pris note du caractère urgent de votre demande.

{question}{request}Je reviendrai vers vous dans les plus brefs délais avec une réponse détaillée.

Dans l'intervalle, n'hésitez pas à me contacter si vous avez besoin d'informations complémentaires.

Cordialement,
[Votre nom]",
    },
    complaint: Template {
        tone: "empathique et professionnel",
        remarks: "💼 Email professionnel avec réclamation - ton empathique recommandé. Proposez une solution concrète si possible.",
        body: "Bonjour,

Je vous remercie d'avoir pris le temps de me contacter.

Je comprends votre préoccupation et je suis désolé(e) pour les désagréments que vous avez rencontrés. Votre retour est précieux et me permet d'améliorer mes services.

Je vais examiner la situation en détail et vous proposer une solution adaptée dans les meilleurs délais.

Je reste à votre disposition pour toute information complémentaire.

Cordialement,
[Votre nom]",
    },
    request: Template {
        tone: "professionnel et bienveillant",
        remarks: "💼 Email professionnel avec demande. Personnalisez le délai de réponse et ajoutez des détails spécifiques si nécessaire.",
        body: "Bonjour,

Je vous remercie pour votre message.

J'ai bien pris note de votre demande concernant {subject}. Je vais l'étudier attentivement et reviendrai vers vous avec les informations nécessaires.

{question}Je m'engage à vous fournir une réponse complète d'ici [préciser délai].

Restant à votre disposition,

Cordialement,
[Votre nom]",
    },
    acknowledgment: Template {
        tone: "professionnel et bienveillant",
        remarks: "💼 Email professionnel standard. Adaptez le contenu selon le contexte spécifique de l'échange.",
        body: "Bonjour,

Je vous remercie pour votre message.

J'ai bien pris connaissance de votre email et des informations que vous m'avez transmises.

{closing}

N'hésitez pas à me recontacter si vous avez des questions complémentaires.

Cordialement,
[Votre nom]",
    },
    personal_question: Template {
        tone: "chaleureux et bienveillant",
        remarks: "👤 Email personnel avec question. Vous pouvez adopter un ton plus détendu et personnalisé.",
        body: "Bonjour,

Merci beaucoup pour ton message !

{opening}Je vais te répondre plus en détail très bientôt.

N'hésite pas si tu as d'autres questions !

Amicalement,
[Votre prénom]",
    },
    personal_note: Template {
        tone: "chaleureux et bienveillant",
        remarks: "👤 Email personnel. N'hésitez pas à adapter le ton selon votre relation avec l'expéditeur.",
        body: "Bonjour,

Merci pour ton message, ça me fait plaisir d'avoir de tes nouvelles !

Je te remercie pour ces informations. Je prends note et je reviens vers toi très vite.

À bientôt !

Amicalement,
[Votre prénom]",
    },
    clauses: Clauses {
        urgent_question: "Concernant votre question, ",
        urgent_request: "Je vais traiter votre demande en priorité et ",
        request_question: "Pour répondre à votre question, je dois rassembler quelques éléments. ",
        ack_question: "Concernant votre question, je vais vous apporter une réponse détaillée sous peu.",
        ack_statement: "Je reviendrai vers vous prochainement avec un retour complet.",
        personal_request: "Bien sûr, je vais regarder ça avec plaisir. ",
        personal_question: "Concernant ta question, ",
    },
};
