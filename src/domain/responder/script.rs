//! Keyword lists and reply pools for the scripted responder.
//!
//! Accept closings carry an `{offer}` placeholder for the lowercased offer
//! title; every other pool entry is returned as-is.

pub(crate) const PRICING_KEYWORDS: [&str; 5] = ["expensive", "cost", "money", "afford", "price"];
pub(crate) const TECHNICAL_KEYWORDS: [&str; 5] = ["technical", "bug", "error", "problem", "issue"];
pub(crate) const USAGE_KEYWORDS: [&str; 4] = ["time", "busy", "use", "using"];
pub(crate) const COMPETITOR_KEYWORDS: [&str; 4] = ["competitor", "alternative", "found", "better"];

/// Keywords that raise the offer-trigger probability from ~60% to ~80%.
pub(crate) const TRIGGER_KEYWORDS: [&str; 7] = [
    "expensive",
    "cost",
    "technical",
    "problem",
    "issue",
    "better",
    "competitor",
];

pub(crate) const PRICING_REPLIES: [&str; 3] = [
    "I completely understand that budget is important. Let me see what special pricing options I can offer you.",
    "Cost is definitely a valid concern. I have some exclusive discounts that might help make this more affordable.",
    "I hear you on the pricing. Let me check what promotional offers are available for valued customers like you.",
];

pub(crate) const TECHNICAL_REPLIES: [&str; 3] = [
    "I'm sorry you're experiencing technical difficulties. Let me help resolve those issues and offer you something for the inconvenience.",
    "Technical problems can be really frustrating. I want to make this right for you with both a solution and a special offer.",
    "I apologize for the technical issues. Let me see how we can fix this and provide you with some compensation.",
];

pub(crate) const USAGE_REPLIES: [&str; 3] = [
    "I understand that life gets busy and priorities change. Let me show you some flexible options that might work better for your schedule.",
    "That makes perfect sense. Maybe we can find a plan that better fits your current lifestyle and usage patterns.",
    "I totally get that - sometimes our needs change. Let me offer you some alternatives that might be more suitable.",
];

pub(crate) const COMPETITOR_REPLIES: [&str; 3] = [
    "I understand you're exploring other options. Before you decide, let me show you some exclusive benefits that our competitors don't offer.",
    "That's completely understandable. I'd love to show you some unique features and offers that might change your perspective.",
    "I appreciate you being upfront about that. Let me present some special advantages that are only available to our existing customers.",
];

pub(crate) const GENERIC_REPLIES: [&str; 4] = [
    "I really appreciate you sharing that with me. Let me see what I can do to address your concerns.",
    "Thank you for explaining your situation. I want to find the best solution for you.",
    "I hear what you're saying, and I want to make sure we find something that works for you.",
    "That's valuable feedback. Let me see what options I have available to help with your situation.",
];

pub(crate) const ACCEPT_CLOSINGS: [&str; 4] = [
    "Wonderful! I'm so glad we could work this out. Your {offer} is now active on your account. Thank you for staying with us!",
    "Excellent choice! Your {offer} has been applied to your account. We really appreciate your continued loyalty.",
    "Perfect! I've activated your {offer}. You should see the changes reflected in your next billing cycle. Thanks for giving us another chance!",
    "Great news! Your {offer} is now live. We're thrilled to have you continue as part of our community!",
];

pub(crate) const REJECT_CLOSINGS: [&str; 4] = [
    "I understand, and I respect your decision. Your cancellation will be processed as requested. We're sorry to see you go, but you're always welcome back.",
    "I completely understand. We'll proceed with your cancellation. Thank you for giving us the opportunity to try to address your concerns.",
    "No problem at all - I appreciate you taking the time to consider our offer. Your cancellation will be processed, and we hope to see you again in the future.",
    "That's perfectly fine. We'll go ahead with the cancellation as you requested. Thank you for being a customer, and we wish you all the best.",
];
