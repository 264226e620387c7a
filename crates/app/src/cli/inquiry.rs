use atelier::catalog::{InquirySection, Live2dDetails, NewInquiry, PhotographyDetails};
use atelier_app::context::AppContext;
use clap::{Args, Subcommand, ValueEnum};

#[derive(Debug, Args)]
pub(crate) struct InquiryCommand {
    #[command(subcommand)]
    command: InquirySubcommand,
}

#[derive(Debug, Subcommand)]
enum InquirySubcommand {
    /// Submit a contact-form inquiry
    Send(SendInquiryArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SectionArg {
    Photography,
    Live2d,
}

impl From<SectionArg> for InquirySection {
    fn from(value: SectionArg) -> Self {
        match value {
            SectionArg::Photography => Self::Photography,
            SectionArg::Live2d => Self::Live2d,
        }
    }
}

#[derive(Debug, Args)]
struct SendInquiryArgs {
    /// Sender name
    #[arg(long)]
    name: String,

    /// Sender email
    #[arg(long)]
    email: String,

    /// Message body
    #[arg(long)]
    message: String,

    /// Contact form the inquiry belongs to
    #[arg(long, value_enum, default_value_t = SectionArg::Photography)]
    section: SectionArg,

    /// Photography: phone number
    #[arg(long, default_value = "")]
    phone: String,

    /// Photography: kind of shoot
    #[arg(long, default_value = "")]
    project_type: String,

    /// Photography: preferred shoot date
    #[arg(long, default_value = "")]
    preferred_date: String,

    /// Live2D: Discord handle
    #[arg(long, default_value = "")]
    discord: String,

    /// Live2D: rig type
    #[arg(long, default_value = "")]
    rig_type: String,

    /// Live2D: deadline
    #[arg(long, default_value = "")]
    deadline: String,

    /// Live2D: whether the rig may be shown on stream
    #[arg(long, default_value = "")]
    can_stream: String,

    /// Live2D: reference sheet link
    #[arg(long, default_value = "")]
    reference: String,
}

impl SendInquiryArgs {
    fn into_inquiry(self) -> NewInquiry {
        match self.section {
            SectionArg::Photography => NewInquiry::photography(
                self.name,
                self.email,
                &PhotographyDetails {
                    phone: self.phone,
                    project_type: self.project_type,
                    preferred_date: self.preferred_date,
                },
                &self.message,
            ),
            SectionArg::Live2d => NewInquiry::live2d(
                self.name,
                self.email,
                &Live2dDetails {
                    discord: self.discord,
                    rig_type: self.rig_type,
                    deadline: self.deadline,
                    can_stream: self.can_stream,
                    reference: self.reference,
                },
                &self.message,
            ),
        }
    }
}

pub(crate) async fn run(ctx: &AppContext, command: InquiryCommand) -> Result<(), String> {
    match command.command {
        InquirySubcommand::Send(args) => {
            if args.message.trim().is_empty() {
                return Err("message is required".to_string());
            }

            let outcome = ctx
                .inquiries
                .submit_inquiry(args.into_inquiry())
                .await
                .map_err(|error| format!("failed to send inquiry: {error}"))?;

            println!("inquiry_id: {}", outcome.inquiry.id);
            println!("relayed: {}", outcome.relayed);

            if let Some(warning) = outcome.warning {
                println!("warning: {warning}");
            }

            Ok(())
        }
    }
}
