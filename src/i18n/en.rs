//! English chrome strings

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Meu Bebê e Eu");
    m.insert(
        Key::AppTagline,
        "Obstetric Fistula: Prevention, Treatment and Hope",
    );

    // Navigation
    m.insert(Key::NavHome, "Home");
    m.insert(Key::NavAbout, "What is Fistula");
    m.insert(Key::NavSolution, "Our Solution");
    m.insert(Key::NavPrevention, "Prevention & Treatment");
    m.insert(Key::NavSurvey, "Questionnaire");
    m.insert(Key::NavInterest, "Express Interest");
    m.insert(Key::NavSettings, "Settings");

    // Navigation Controls
    m.insert(Key::Back, "Back");
    m.insert(Key::Forward, "Forward");

    // Common UI
    m.insert(Key::Retry, "Try again");
    m.insert(Key::BackToHome, "Back to Home");
    m.insert(Key::OnThisPage, "On This Page");

    // Video references
    m.insert(Key::VideoOpen, "Watch on YouTube");
    m.insert(Key::VideoCopyLink, "Copy video link");
    m.insert(Key::VideoLinkCopied, "Link copied to clipboard");

    // Home - dynamic statistics section
    m.insert(Key::StatsKicker, "Live Data");
    m.insert(Key::StatsTitle, "Public Perception of Fistula");
    m.insert(
        Key::StatsIntro,
        "Aggregated, anonymous results from our questionnaire, showing the \
         community's level of awareness.",
    );
    m.insert(Key::StatsLoading, "Loading statistics...");
    m.insert(
        Key::StatsUnavailable,
        "Statistics could not be loaded at the moment.",
    );
    m.insert(Key::StatsTotalLabel, "Total responses received");
    m.insert(Key::StatsAwarenessLabel, "Have heard of fistula");
    m.insert(Key::StatsCauseLabel, "Identify the main cause correctly");
    m.insert(Key::StatsUpdatedAt, "Updated at");

    // Home - calls to action
    m.insert(Key::HomeSurveyAction, "Answer the Questionnaire");
    m.insert(Key::HomeInterestAction, "Express Interest");
    m.insert(Key::HomeSolutionAction, "Discover the Solution");

    // Survey page
    m.insert(Key::SurveyTitle, "Awareness Questionnaire");
    m.insert(
        Key::SurveyIntro,
        "Help us gauge public awareness of obstetric fistula. Your answers are \
         anonymous.",
    );
    m.insert(Key::SurveyDemographicsTitle, "Demographics (Optional)");
    m.insert(Key::SurveyAgeLabel, "Age group");
    m.insert(Key::SurveyGenderLabel, "Gender");
    m.insert(Key::SurveyProvinceLabel, "Province (Angola)");
    m.insert(Key::SurveyProvincePlaceholder, "E.g. Huíla");
    m.insert(Key::SurveyPreferNotToSay, "Prefer not to say");
    m.insert(Key::SurveyQ1Title, "1. Have you heard of obstetric fistula?*");
    m.insert(
        Key::SurveyQ2Title,
        "2. In your opinion, what is an obstetric fistula?*",
    );
    m.insert(
        Key::SurveyQ3Title,
        "3. What do you believe are the main causes? (Select all that apply)",
    );
    m.insert(
        Key::SurveyQ4Title,
        "4. In your opinion, can obstetric fistula be treated?*",
    );
    m.insert(Key::SurveyYes, "Yes");
    m.insert(Key::SurveyNo, "No");
    m.insert(Key::SurveyGenderFemale, "Female");
    m.insert(Key::SurveyGenderMale, "Male");
    m.insert(Key::SurveyGenderOther, "Other");
    m.insert(Key::SurveyAgeUnder18, "< 18 years");
    m.insert(Key::SurveyAge18To25, "18-25 years");
    m.insert(Key::SurveyAge26To35, "26-35 years");
    m.insert(Key::SurveyAge36To50, "36-50 years");
    m.insert(Key::SurveyAgeOver50, "> 50 years");
    m.insert(Key::SurveyDefInfection, "A sexually transmitted infection.");
    m.insert(
        Key::SurveyDefOpening,
        "An abnormal opening between the birth canal and the bladder or rectum.",
    );
    m.insert(Key::SurveyDefGenetic, "An inherited genetic complication.");
    m.insert(Key::SurveyDefUnknown, "I don't know / I'm not sure.");
    m.insert(
        Key::SurveyCauseProlongedLabor,
        "Prolonged, unassisted labor",
    );
    m.insert(Key::SurveyCauseHygiene, "Poor personal hygiene");
    m.insert(
        Key::SurveyCausePhysicalEffort,
        "Lifting heavy objects during pregnancy",
    );
    m.insert(
        Key::SurveyCauseFailedSurgery,
        "Complications from a cesarean or other surgery",
    );
    m.insert(Key::SurveyTreatableYes, "Yes, through surgery");
    m.insert(Key::SurveyTreatableNo, "No, it is a permanent condition");
    m.insert(Key::SurveyTreatableUnknown, "I don't know / I'm not sure");
    m.insert(Key::SurveySubmit, "Submit Answers");
    m.insert(Key::SurveySubmitting, "Submitting...");
    m.insert(
        Key::SurveyValidationMissing,
        "Please answer the required questions.",
    );
    m.insert(Key::SurveyRejectedFallback, "Failed to submit your answers.");
    m.insert(Key::SurveySuccessTitle, "Thank you!");
    m.insert(
        Key::SurveySuccessBody,
        "Your answers were submitted successfully and will help us better \
         understand awareness of obstetric fistula.",
    );
    m.insert(Key::SurveyAnswerAgain, "Answer again");

    // Interest page
    m.insert(Key::InterestTitle, "Express Your Interest");
    m.insert(
        Key::InterestIntro,
        "If you are a health professional or manage a clinic or hospital and \
         would like to use our applications, please fill in the form below.",
    );
    m.insert(Key::InterestNamePlaceholder, "Your full name");
    m.insert(Key::InterestEmailPlaceholder, "Your contact email");
    m.insert(Key::InterestOrgPlaceholder, "Organization (optional)");
    m.insert(Key::InterestRolePlaceholder, "Your role (optional)");
    m.insert(
        Key::InterestMessagePlaceholder,
        "Leave a message (optional)...",
    );
    m.insert(Key::InterestSubmit, "Send");
    m.insert(
        Key::InterestValidationMissing,
        "Please provide your name and a valid email.",
    );
    m.insert(
        Key::InterestRejectedFallback,
        "Failed to send your message. Please try again.",
    );
    m.insert(Key::InterestSuccessTitle, "Thank you!");
    m.insert(
        Key::InterestSuccessBody,
        "Your expression of interest was sent successfully. We will be in touch \
         soon.",
    );

    // Shared form errors
    m.insert(
        Key::GenericSubmitError,
        "Something went wrong. Please try again.",
    );

    // Footer
    m.insert(Key::FooterRights, "All rights reserved.");
    m.insert(
        Key::FooterCredit,
        "A monograph project by Jefte Felino Quintion Sambango.",
    );

    // Settings Page
    m.insert(Key::SettingsTitle, "Settings");
    m.insert(Key::SettingsDisplayTitle, "Display");
    m.insert(Key::SettingsLanguage, "Language");
    m.insert(
        Key::SettingsLanguageDesc,
        "Interface language (editorial content remains in Portuguese)",
    );
    m.insert(Key::SettingsDarkMode, "Dark mode");
    m.insert(Key::SettingsDarkModeDesc, "Use the dark application theme");
    m.insert(Key::SettingsAboutTitle, "About");
    m.insert(Key::SettingsVersion, "Version");
    m.insert(Key::SettingsApiUrl, "API address");
    m.insert(
        Key::SettingsApiUrlDesc,
        "Set through the MEU_BEBE_API_URL environment variable",
    );
    m.insert(
        Key::SettingsDescription,
        "Awareness and data-collection platform on obstetric fistula in Angola, \
         in partnership with CEML.",
    );

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
