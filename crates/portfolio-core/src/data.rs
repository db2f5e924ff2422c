//! Hand-authored content for the portfolio sections.

use crate::records::{
    AssetHandle, ContactInfoRow, CredentialRecord, FieldId, FieldKind, IconKind, ProjectRecord,
};

pub const CONTACT_HEADING: &str = "Get In Touch";
pub const CONTACT_INFO_HEADING: &str = "Contact Information";
pub const EDUCATION_HEADING: &str = "Education & Certifications";
pub const PROJECTS_HEADING: &str = "Featured Projects";

pub const ACKNOWLEDGMENT_TITLE: &str = "Thank you for contacting Me!";
pub const ACKNOWLEDGMENT_BODY: &str = "I'll get back to you as soon as possible.";

pub const CONTACT_INFO: &[ContactInfoRow] = &[
    ContactInfoRow {
        icon: IconKind::Mail,
        text: "prudhviankamreddi1@gmail.com",
    },
    ContactInfoRow {
        icon: IconKind::Phone,
        text: "+91 6305845312",
    },
    ContactInfoRow {
        icon: IconKind::MapPin,
        text: "Anakapalli, Andhra Pradesh, India",
    },
];

pub const CREDENTIALS: &[CredentialRecord] = &[
    CredentialRecord {
        title: "Bachelor of Technology",
        institution: "Kakinada Institute of  Engineering and Technology",
        period: "2021 - 2025",
        description: "Pursuing my Bachelor's Degree in Computer Science (Data Science) at Kiet group of Institutions, I'm gaining in-depth knowledge in areas like Data Science, Machine Learning and Web Development. With a GPA of 7.8",
        icon: IconKind::GraduationCap,
    },
    CredentialRecord {
        title: "Intermediate",
        institution: "Sri Chaitanya Junior College",
        period: "2019 - 2021",
        description: "I completed my Intermediate at Sri Chaitanya Junior College in the group of MPC",
        icon: IconKind::Award,
    },
    CredentialRecord {
        title: "High School",
        institution: "Sree Balaji High School",
        period: "2006 - 2019",
        description: "I completed my Schooling at Sree Balaji High School",
        icon: IconKind::Book,
    },
];

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        title: "K-Hub Website",
        description: "Developed a comprehensive MERN stack web application for K-Hub to effectively showcase its mission and initiatives to a larger audience. Implemented a robust backend with an admin panel for content management and updates.",
        image: AssetHandle::svg("k-hub"),
        tech: &["React", "Node.js", "MongoDB", "git"],
        repo_url: "https://github.com/Prudhvi2k3/Project-K",
        live_url: "https://project-k-hub.onrender.com/",
    },
    ProjectRecord {
        title: "Virtual Mouse Using Hand Gesture",
        description: "A hand gesture recognition system implemented using MediaPipe for hand tracking and Flask for web streaming. The system captures video from the webcam, processes it to detect hand gestures in real-time, and displays the live feed along with recognized gestures on a web interface.",
        image: AssetHandle::svg("hand-gesture"),
        tech: &["Python", "Flask", "OpenCV", "MedaPipe"],
        repo_url: "https://github.com/Prudhvi2k3/virtual-mouse-using-hand-gesture",
        live_url: "https://www.linkedin.com/posts/prudhvi-ankamreddi_gesturecontrol-computervision-pyautogui-activity-7256169573119336448-2EKD?utm_source=share&utm_medium=member_desktop",
    },
    ProjectRecord {
        title: "Data Visualization",
        description: "Developed a Flask-based web application for interactive data visualization and Implemented a robust backend to handle dataset uploads and preprocessing.",
        image: AssetHandle::svg("data-visualizer"),
        tech: &["Flask", "Pandas", "matplotlib", "Html", "CSS"],
        repo_url: "https://github.com/Prudhvi2k3/DataVisualizer",
        live_url: "#",
    },
    ProjectRecord {
        title: "Data Analytics",
        description: "K-Hub Development task is to create a single page React Application that shows the data analytics for a preloaded dataset. The backend is implemented using python and flask with, the data being stored in a Mongo database and the read through the use of PyMongo.",
        image: AssetHandle::svg("aug-task"),
        tech: &["React", "Flask", "Pandas", "Seaborn"],
        repo_url: "https://github.com/Prudhvi2k3/K-Hub-Task/tree/main/AugTask",
        live_url: "#",
    },
    ProjectRecord {
        title: "Environment themed Webpage",
        description: "This project involves creating a webpage using React components. with the aim to design a responsive webpage with various components and content related to environment theme.",
        image: AssetHandle::svg("nov-task"),
        tech: &["React", "React-charts", "git"],
        repo_url: "https://github.com/Prudhvi2k3/K-Hub-Task/tree/main/NovTask",
        live_url: "https://green-tech-project.onrender.com/",
    },
];

/// Label, input kind and placeholder for a form field
pub fn field_descriptor(id: FieldId) -> (&'static str, FieldKind, &'static str) {
    match id {
        FieldId::Name => (id.label(), FieldKind::Text, "Your name"),
        FieldId::Email => (id.label(), FieldKind::Email, "your@email.com"),
        FieldId::Message => (id.label(), FieldKind::Multiline, "Your message"),
    }
}
