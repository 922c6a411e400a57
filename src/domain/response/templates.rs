//! Fixed client lines used by the response rules.
//!
//! Scenario-specific detail comes from the scenario catalog; everything
//! here is shared across scenarios.

pub const ESCALATION_REPLY: &str = "I'll get our senior developer Alex to join our next call. In the meantime, could you take a look at our codebase? I've just sent you access to our repository. The navigation component is in the src/components/Navigation directory.";

pub const NEED_MORE_INFORMATION_REPLY: &str = "I need a bit more information from your side. What specific approach are you thinking of taking to solve this issue? We're really stuck and could use your expert guidance on the best way forward.";

pub const SCREEN_SHARE_REPLY: &str = "Great, I can see your screen now. Could you navigate to the problem area? I notice the error appears in the console whenever we click a navigation link. Does that error message tell you anything specific about what might be causing it?";

pub const TIMELINE_REPLY: &str = "Thanks for giving me that timeline. That works with our schedule. Our priority is getting the navigation working again since users can't access key parts of the application. Would it help if I arranged a call with our product team so they understand the timeline as well?";

pub const EXPLANATION_REPLY: &str = "That explanation makes sense. I appreciate you breaking it down in a way I can understand. Based on what you're saying, should we consider rolling back to the previous version temporarily while you implement a proper fix? Our users are getting frustrated.";

pub const SUGGESTED_FIX_REPLY: &str = "That approach sounds promising. How confident are you that this will resolve the issue? And will this solution be sustainable long-term, or should we be looking at a more comprehensive refactoring of that component?";

// ============================================================================
// Fallbacks by transcript length
// ============================================================================

pub const EARLY_FALLBACK_REPLY: &str = "I understand you need more information. What specific details about the navigation component would help you diagnose the issue better? I can provide our repository access or error logs if that would help.";

pub const MIDDLE_FALLBACK_REPLY: &str = "I appreciate your help with this. Our team has been stuck on this problem for a couple of days now. Do you think this is something that will require significant changes to fix, or could it be something relatively simple that we've overlooked?";

pub const LATE_FALLBACK_REPLY: &str = "Given everything we've discussed so far, what do you think is our best path forward? Our team is ready to implement your recommendations, but we want to make sure we're taking the right approach to prevent this from happening again.";
