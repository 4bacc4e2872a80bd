//! Guest-facing message catalog.
//!
//! The client renders these strings verbatim, so they are wire contract,
//! not presentation. Webhook responses are the one machine-facing
//! exception and stay in English.

pub const MSG_MISSING_FIELDS: &str =
    "Informations manquantes. Veuillez fournir un nom, un email et un créneau.";
pub const MSG_UNKNOWN_SLOT: &str = "Ce créneau n'existe pas.";
pub const MSG_SLOT_ALREADY_RESERVED: &str =
    "Ce créneau a déjà été réservé. Veuillez en choisir un autre.";
pub const MSG_AVAILABILITY_ERROR: &str =
    "Erreur lors de la vérification de la disponibilité.";
pub const MSG_RESERVATION_ERROR: &str = "Erreur lors de la réservation du créneau.";
pub const MSG_LISTING_ERROR: &str = "Erreur lors de la récupération des créneaux.";

pub const MSG_DJ_SUCCESS: &str = "Merci ! Votre créneau DJ a été réservé.";
pub const MSG_COOKING_SUCCESS: &str =
    "Votre créneau de cuisine a été réservé avec succès!";
pub const MSG_VOLUNTEER_SUCCESS: &str = "Votre place a été réservée avec succès!";
pub const MSG_UNKNOWN_VOLUNTEER_CATEGORY: &str = "Catégorie de bénévolat inconnue.";

pub const MSG_RSVP_MISSING_FIELDS: &str = "Données incomplètes";
pub const MSG_RSVP_SUCCESS: &str = "RSVP enregistré avec succès";
pub const MSG_RSVP_INSERT_ERROR: &str = "Erreur lors de l'enregistrement des données";

pub const MSG_CARPOOL_MISSING_FIELDS: &str =
    "Informations manquantes. Veuillez remplir tous les champs obligatoires.";
pub const MSG_CARPOOL_INVALID_WHATSAPP: &str =
    "Format WhatsApp invalide. Utilisez le format 33 suivi de 9 chiffres (ex: 33612345678).";
pub const MSG_CARPOOL_INSERT_ERROR: &str =
    "Erreur lors de l'enregistrement de votre offre.";
pub const MSG_CARPOOL_SUCCESS: &str =
    "Votre offre de covoiturage a été enregistrée avec succès!";
pub const MSG_CARPOOL_NOT_FOUND: &str = "Offre de covoiturage introuvable.";
pub const MSG_CARPOOL_LISTING_ERROR: &str =
    "Erreur lors de la récupération des offres de covoiturage.";

pub const MSG_PROPOSAL_MISSING_FIELDS: &str = "Données incomplètes";
pub const MSG_PROPOSAL_SUCCESS: &str = "Votre proposition a bien été envoyée. Merci !";
pub const MSG_PROPOSAL_SEND_ERROR: &str =
    "Erreur lors de l'envoi de votre proposition.";
pub const MSG_MAIL_NOT_CONFIGURED: &str =
    "Service d'envoi d'e-mails non configuré.";

pub const MSG_WEBHOOK_INVALID: &str = "Invalid webhook payload";
pub const MSG_WEBHOOK_PROCESSED: &str = "Webhook processed successfully";
